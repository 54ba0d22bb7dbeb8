use crate::ids::{ReceiptId, StudentId};
use crate::models::Month;
use crate::Money;

use chrono::{DateTime, Utc};

/// A recorded fee receipt. Rows are append-only; paying again for an
/// already-paid month adds another row, and the amounts are summed during
/// aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub receipt: ReceiptId,
    pub student_id: StudentId,
    pub month: Month,
    pub year: u16,
    pub monthly_fee: Money,
    /// Meaningful only for the hifz track; ignored for every other class.
    pub food_fee: Option<Money>,
    pub other_fee: Money,
    pub received_by: String,
    pub notes: String,
    pub recorded_at: DateTime<Utc>,
}

/// A payment as submitted by the office, before the ledger has assigned a
/// receipt number and stamped it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    pub student_id: StudentId,
    pub month: Month,
    pub year: u16,
    pub monthly_fee: Money,
    pub food_fee: Option<Money>,
    pub other_fee: Money,
    pub received_by: String,
    pub notes: String,
    pub recorded_at: Option<DateTime<Utc>>,
}

impl Payment {
    pub fn from_request(
        request: PaymentRequest,
        receipt: ReceiptId,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        return Self {
            receipt,
            student_id: request.student_id,
            month: request.month,
            year: request.year,
            monthly_fee: request.monthly_fee,
            food_fee: request.food_fee,
            other_fee: request.other_fee,
            received_by: request.received_by,
            notes: request.notes,
            recorded_at,
        };
    }
}
