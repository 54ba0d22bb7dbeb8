use crate::ids::StudentId;
use crate::models::{ClassName, FeeSchedule, Month, PaymentRequest, Student};
use crate::Money;
use crate::Result;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

/// Raw student row as it appears in an office export.
#[derive(Deserialize, Debug, Clone)]
pub struct StudentRecord {
    pub id: u32,
    pub name: String,
    pub father_name: String,
    pub address: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub mobile: String,
}

/// Raw fee-receipt row. Amounts arrive as text exactly as typed, so they go
/// through `Money::parse` rather than a numeric deserializer.
#[derive(Deserialize, Debug, Clone)]
pub struct PaymentRecord {
    pub student_id: u32,
    pub month: u32,
    pub year: u16,
    pub monthly_fee: String,
    pub food_fee: Option<String>,
    pub other_fee: String,
    pub received_by: String,
    pub notes: Option<String>,
    pub recorded_at: Option<String>,
}

/// Raw fee-schedule row; a schedule file carries exactly one.
#[derive(Deserialize, Debug, Clone)]
pub struct FeeRecord {
    pub monthly_fee: String,
    pub food_fee: String,
    pub other_fee: String,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing student record: name is required: {0:?}")]
    MissingName(StudentRecord),

    #[error("Error parsing student record: mobile must be 10 to 15 digits or empty: {0:?}")]
    IllegalMobile(StudentRecord),

    #[error("Error parsing payment record: bad recorded_at timestamp: {0:?}")]
    BadTimestamp(PaymentRecord),
}

impl StudentRecord {
    pub fn parse_student(self) -> Result<Student> {
        if self.name.trim().is_empty() {
            Err(InputParseError::MissingName(self.clone()))?
        }

        let mobile = self.mobile.trim().to_string();

        if !mobile.is_empty() {
            let digits_only = mobile.chars().all(|c| c.is_ascii_digit());

            if !digits_only || mobile.len() < 10 || mobile.len() > 15 {
                Err(InputParseError::IllegalMobile(self.clone()))?
            }
        }

        let class_name = ClassName::parse(&self.class_name)?;

        return Ok(Student {
            id: StudentId(self.id),
            name: self.name.trim().to_string(),
            father_name: self.father_name.trim().to_string(),
            address: self.address.trim().to_string(),
            class_name,
            mobile,
        });
    }
}

impl PaymentRecord {
    pub fn parse_request(self) -> Result<PaymentRequest> {
        let month = Month::from_number(self.month)?;
        let monthly_fee = Money::parse(&self.monthly_fee)?;
        let other_fee = Money::parse(&self.other_fee)?;

        let food_fee = match self.food_fee.as_deref() {
            None | Some("") => None,
            Some(amount) => Some(Money::parse(amount)?),
        };

        let recorded_at = match self.recorded_at.as_deref() {
            None | Some("") => None,
            Some(stamp) => Some(parse_timestamp(stamp, &self)?),
        };

        return Ok(PaymentRequest {
            student_id: StudentId(self.student_id),
            month,
            year: self.year,
            monthly_fee,
            food_fee,
            other_fee,
            received_by: self.received_by.trim().to_string(),
            notes: self.notes.unwrap_or_default().trim().to_string(),
            recorded_at,
        });
    }
}

impl FeeRecord {
    pub fn parse_schedule(self) -> Result<FeeSchedule> {
        return Ok(FeeSchedule {
            monthly_fee: Money::parse(&self.monthly_fee)?,
            food_fee: Money::parse(&self.food_fee)?,
            other_fee: Money::parse(&self.other_fee)?,
        });
    }
}

fn parse_timestamp(stamp: &str, record: &PaymentRecord) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(stamp)
        .map_err(|_| InputParseError::BadTimestamp(record.clone()))?;

    return Ok(parsed.with_timezone(&Utc));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_student_record(mobile: &str) -> StudentRecord {
        StudentRecord {
            id: 101,
            name: "Ayesha Siddiqua".to_string(),
            father_name: "Abdul Karim".to_string(),
            address: "Mirpur, Dhaka".to_string(),
            class_name: "hifz".to_string(),
            mobile: mobile.to_string(),
        }
    }

    fn build_payment_record() -> PaymentRecord {
        PaymentRecord {
            student_id: 101,
            month: 3,
            year: 2025,
            monthly_fee: "500".to_string(),
            food_fee: Some("200".to_string()),
            other_fee: "50".to_string(),
            received_by: "Rahim".to_string(),
            notes: None,
            recorded_at: Some("2025-03-02T09:30:00Z".to_string()),
        }
    }

    #[test]
    fn parses_a_student_row() {
        let student = build_student_record("01728517544").parse_student().unwrap();

        assert_eq!(student.id, StudentId(101));
        assert_eq!(student.class_name, ClassName::Hifz);
        assert_eq!(student.mobile, "01728517544");
    }

    #[test]
    fn empty_mobile_is_allowed() {
        let student = build_student_record("").parse_student().unwrap();
        assert_eq!(student.mobile, "");
    }

    #[test]
    fn mobile_outside_10_to_15_digits_is_rejected() {
        assert!(build_student_record("12345").parse_student().is_err());
        assert!(build_student_record("1234567890123456").parse_student().is_err());
        assert!(build_student_record("017-285-175").parse_student().is_err());
    }

    #[test]
    fn unknown_class_is_rejected() {
        let mut record = build_student_record("");
        record.class_name = "grade-9".to_string();

        assert!(record.parse_student().is_err());
    }

    #[test]
    fn parses_a_payment_row() {
        let request = build_payment_record().parse_request().unwrap();

        assert_eq!(request.student_id, StudentId(101));
        assert_eq!(request.month, Month::March);
        assert_eq!(request.monthly_fee, Money(50000));
        assert_eq!(request.food_fee, Some(Money(20000)));
        assert!(request.recorded_at.is_some());
    }

    #[test]
    fn blank_food_fee_means_none() {
        let mut record = build_payment_record();
        record.food_fee = Some("".to_string());

        assert_eq!(record.parse_request().unwrap().food_fee, None);
    }

    #[test]
    fn month_outside_calendar_is_rejected() {
        let mut record = build_payment_record();
        record.month = 13;

        assert!(record.parse_request().is_err());
    }

    #[test]
    fn unparsable_amount_is_rejected() {
        let mut record = build_payment_record();
        record.monthly_fee = "abc".to_string();

        assert!(record.parse_request().is_err());
    }
}
