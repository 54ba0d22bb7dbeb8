use crate::ids::{ReceiptId, StudentId};
use crate::models::{Month, Payment, Student};
use crate::{Money, Result};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonthStatusError {
    #[error("Receipt {0} belongs to student {1}, not student {2}")]
    ForeignReceipt(ReceiptId, StudentId, StudentId),
}

/// Status of one calendar month for one student: the summed amounts
/// actually received, and whether the month counts as paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthStatus {
    pub month: Month,
    pub monthly_fee: Money,
    pub food_fee: Money,
    pub other_fee: Money,
    pub paid: bool,
}

impl MonthStatus {
    /// The amount that decides paid/unpaid: monthly + other, plus food for
    /// the hifz track only (the food column is zeroed for everyone else
    /// before this is called).
    pub fn qualifying_total(&self) -> Result<Money> {
        let mut total = self.monthly_fee;
        total.add(&self.food_fee)?;
        total.add(&self.other_fee)?;

        return Ok(total);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StudentTotals {
    pub total_monthly: Money,
    pub total_food: Money,
    pub total_other: Money,
    pub grand_total: Money,
}

/// Merges a student's payment rows onto the fixed twelve-month calendar.
/// Duplicate rows for one month are summed, not flagged. Unpaid months
/// carry zero amounts, so totals over the array reflect money actually
/// received. Food stored on a non-hifz row never contributes.
pub fn month_status(student: &Student, payments: &[Payment]) -> Result<[MonthStatus; 12]> {
    let mut entries = Month::ALL.map(|month| MonthStatus {
        month,
        monthly_fee: Money::ZERO,
        food_fee: Money::ZERO,
        other_fee: Money::ZERO,
        paid: false,
    });

    for payment in payments {
        if payment.student_id != student.id {
            Err(MonthStatusError::ForeignReceipt(
                payment.receipt,
                payment.student_id,
                student.id,
            ))?
        }

        let entry = &mut entries[payment.month.index()];

        entry.monthly_fee.add(&payment.monthly_fee)?;
        entry.other_fee.add(&payment.other_fee)?;

        if student.class_name.has_food_fee() {
            if let Some(food_fee) = payment.food_fee {
                entry.food_fee.add(&food_fee)?;
            }
        }
    }

    for entry in entries.iter_mut() {
        entry.paid = entry.qualifying_total()? > Money::ZERO;
    }

    return Ok(entries);
}

/// Plain sums over the twelve entries.
pub fn student_totals(entries: &[MonthStatus; 12]) -> Result<StudentTotals> {
    let mut totals = StudentTotals::default();

    for entry in entries {
        totals.total_monthly.add(&entry.monthly_fee)?;
        totals.total_food.add(&entry.food_fee)?;
        totals.total_other.add(&entry.other_fee)?;
    }

    totals.grand_total = totals.total_monthly;
    totals.grand_total.add(&totals.total_food)?;
    totals.grand_total.add(&totals.total_other)?;

    return Ok(totals);
}

pub fn paid_months(entries: &[MonthStatus; 12]) -> Vec<Month> {
    return entries
        .iter()
        .filter(|entry| entry.paid)
        .map(|entry| entry.month)
        .collect();
}

pub fn unpaid_months(entries: &[MonthStatus; 12]) -> Vec<Month> {
    return entries
        .iter()
        .filter(|entry| !entry.paid)
        .map(|entry| entry.month)
        .collect();
}
