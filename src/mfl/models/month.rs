use crate::Result;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonthError {
    #[error("Month not found: {0} is outside the 1..=12 calendar")]
    NumberNotFound(u32),

    #[error("Month not found: {0:?}")]
    LabelNotFound(String),
}

/// Calendar month of the fee year. Every report covers the fixed ordered
/// January..December window, whatever subset of it was actually paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn number(&self) -> u32 {
        return *self as u32 + 1;
    }

    /// Zero-based position in the fixed calendar.
    pub fn index(&self) -> usize {
        return *self as usize;
    }

    pub fn label(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    pub fn from_number(number: u32) -> Result<Self> {
        if !(1..=12).contains(&number) {
            Err(MonthError::NumberNotFound(number))?
        }

        return Ok(Month::ALL[(number - 1) as usize]);
    }

    /// Accepts either a calendar number or a month name, for report filters.
    pub fn parse(string: &str) -> Result<Self> {
        let trimmed = string.trim();

        if let Ok(number) = trimmed.parse::<u32>() {
            return Month::from_number(number);
        }

        let lowered = trimmed.to_lowercase();

        for month in Month::ALL {
            if month.label().to_lowercase() == lowered {
                return Ok(month);
            }
        }

        Err(MonthError::LabelNotFound(string.to_string()))?
    }
}
