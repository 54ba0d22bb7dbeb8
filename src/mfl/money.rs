use crate::Result;

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1:?} and {2:?}")]
    Overflow(&'static str, Money, Money),

    #[error("Overflow error while scaling {0:?} by {1}")]
    ScaleOverflow(Money, u32),

    #[error("Money parse error: {0}: {1:?}")]
    Parse(&'static str, String),
}

/// Amount in minor units, two fraction digits. Accumulation stays on
/// integers end to end; rendering to `N.NN` happens only at the
/// presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);

    /// Parses an office-entered amount: surrounding whitespace trimmed,
    /// thousands separators stripped, fraction padded or cut to two digits.
    /// Blank input, non-decimal text, and negative amounts are rejected.
    pub fn parse(string: &str) -> Result<Self> {
        let cleaned = string.trim().replace(',', "");

        if cleaned.is_empty() {
            Err(MoneyError::Parse("Blank amount", string.to_string()))?
        }

        if cleaned.starts_with('-') {
            Err(MoneyError::Parse(
                "Negative amounts not supported",
                string.to_string(),
            ))?
        }

        let mut parts = cleaned.split('.');

        let units = parts.next().unwrap_or("");
        let fraction = parts.next().unwrap_or("0");

        if parts.next().is_some() {
            Err(MoneyError::Parse(
                "Too many decimal points",
                string.to_string(),
            ))?
        }

        if !units.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            Err(MoneyError::Parse("Not a decimal amount", string.to_string()))?
        }

        if units.is_empty() && fraction.is_empty() {
            Err(MoneyError::Parse("Not a decimal amount", string.to_string()))?
        }

        let units: i64 = if units.is_empty() {
            0
        } else {
            units
                .parse()
                .map_err(|_| MoneyError::Parse("Amount out of range", string.to_string()))?
        };

        let fraction = format!("{:0<2}", fraction);
        let fraction: i64 = fraction[..2]
            .parse()
            .map_err(|_| MoneyError::Parse("Amount out of range", string.to_string()))?;

        let minor = units
            .checked_mul(100)
            .and_then(|value| value.checked_add(fraction))
            .ok_or_else(|| MoneyError::Parse("Amount out of range", string.to_string()))?;

        return Ok(Money(minor));
    }

    pub fn add(&mut self, other: &Self) -> Result {
        let a = self.0;
        let b = other.0;

        if b > 0 && Money::MAX.0 - b < a {
            Err(MoneyError::Overflow("add", Money(a), *other))?
        }

        self.0 += b;

        return Ok(());
    }

    /// Scales by a whole count of months, for projecting a full-year due
    /// amount from the current schedule.
    pub fn times(&self, count: u32) -> Result<Self> {
        let scaled = self
            .0
            .checked_mul(i64::from(count))
            .ok_or(MoneyError::ScaleOverflow(*self, count))?;

        return Ok(Self(scaled));
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}.{:02}", self.0 / 100, self.0 % 100);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_amount() {
        assert_eq!(Money::parse("500").unwrap(), Money(50000));
        assert_eq!(Money::parse("0").unwrap(), Money(0));
        assert_eq!(Money::parse("12.34").unwrap(), Money(1234));
    }

    #[test]
    fn parse_trims_and_strips_separators() {
        assert_eq!(Money::parse(" 1,250.5 ").unwrap(), Money(125050));
        assert_eq!(Money::parse("1,00,000").unwrap(), Money(10000000));
    }

    #[test]
    fn parse_pads_and_cuts_fraction() {
        assert_eq!(Money::parse("7.5").unwrap(), Money(750));
        assert_eq!(Money::parse("7.505").unwrap(), Money(750));
        assert_eq!(Money::parse("7.").unwrap(), Money(700));
    }

    #[test]
    fn parse_rejects_blank() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("   ").is_err());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("12.3.4").is_err());
        assert!(Money::parse("12a").is_err());
        assert!(Money::parse(".").is_err());
    }

    #[test]
    fn parse_rejects_negative() {
        assert!(Money::parse("-5").is_err());
        assert!(Money::parse(" -5.00").is_err());
    }

    #[test]
    fn add_accumulates() {
        let mut total = Money::ZERO;
        total.add(&Money(50000)).unwrap();
        total.add(&Money(5000)).unwrap();

        assert_eq!(total, Money(55000));
    }

    #[test]
    fn add_overflow_is_an_error() {
        let mut total = Money::MAX;
        assert!(total.add(&Money(1)).is_err());
    }

    #[test]
    fn times_scales_by_month_count() {
        assert_eq!(Money(75000).times(10).unwrap(), Money(750000));
        assert_eq!(Money(75000).times(0).unwrap(), Money::ZERO);
    }

    #[test]
    fn display_renders_two_fraction_digits() {
        assert_eq!(Money(50000).to_string(), "500.00");
        assert_eq!(Money(125050).to_string(), "1250.50");
        assert_eq!(Money(5).to_string(), "0.05");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }
}
