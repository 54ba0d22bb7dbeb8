use crate::ids::{ReceiptId, StudentId};
use crate::models::{Payment, PaymentRequest};

use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// Append-only record of fee receipts. Rows are never edited; the only
/// removal is the cascade when a student is deleted, which drops all of
/// that student's rows as one unit.
#[derive(Debug, Default)]
pub struct PaymentLedger {
    history: Vec<Payment>,
    lookup_map: HashMap<StudentId, Vec<usize>>,
    next_receipt: u64,
}

impl PaymentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the next receipt number and appends the row.
    pub fn append(&mut self, request: PaymentRequest, recorded_at: DateTime<Utc>) -> ReceiptId {
        let receipt = ReceiptId(self.next_receipt);
        self.next_receipt += 1;

        let student_id = request.student_id;
        let index = self.history.len();

        self.history
            .push(Payment::from_request(request, receipt, recorded_at));

        if let Some(indicies) = self.lookup_map.get_mut(&student_id) {
            indicies.push(index);
        } else {
            self.lookup_map.insert(student_id, vec![index]);
        }

        receipt
    }

    pub fn payments_for(&self, student_id: StudentId) -> Vec<&Payment> {
        match self.lookup_map.get(&student_id) {
            Some(indicies) => indicies.iter().map(|index| &self.history[*index]).collect(),
            None => vec![],
        }
    }

    /// Cascade half of student deletion: drops every row for the student
    /// and reindexes the lookup map before returning. Returns the number of
    /// rows removed.
    pub fn remove_student(&mut self, student_id: StudentId) -> usize {
        if !self.lookup_map.contains_key(&student_id) {
            return 0;
        }

        let before = self.history.len();

        self.history
            .retain(|payment| payment.student_id != student_id);
        self.rebuild_lookup();

        return before - self.history.len();
    }

    pub fn history(&self) -> &[Payment] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn rebuild_lookup(&mut self) {
        self.lookup_map.clear();

        for (index, payment) in self.history.iter().enumerate() {
            if let Some(indicies) = self.lookup_map.get_mut(&payment.student_id) {
                indicies.push(index);
            } else {
                self.lookup_map.insert(payment.student_id, vec![index]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::Month;
    use crate::Money;

    use chrono::TimeZone;

    const SOME_STUDENT_ID: StudentId = StudentId(101);
    const OTHER_STUDENT_ID: StudentId = StudentId(102);

    fn build_request(student_id: StudentId, month: Month) -> PaymentRequest {
        PaymentRequest {
            student_id,
            month,
            year: 2025,
            monthly_fee: Money(50000),
            food_fee: Some(Money(20000)),
            other_fee: Money(5000),
            received_by: "Rahim".to_string(),
            notes: String::new(),
            recorded_at: None,
        }
    }

    fn some_stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 5, 10, 0, 0).unwrap()
    }

    #[test]
    fn append_assigns_sequential_receipts() {
        let mut ledger = PaymentLedger::new();

        let first = ledger.append(build_request(SOME_STUDENT_ID, Month::January), some_stamp());
        let second = ledger.append(build_request(SOME_STUDENT_ID, Month::March), some_stamp());

        assert_eq!(first, ReceiptId(0));
        assert_eq!(second, ReceiptId(1));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn payments_for_returns_only_that_student() {
        let mut ledger = PaymentLedger::new();

        ledger.append(build_request(SOME_STUDENT_ID, Month::January), some_stamp());
        ledger.append(build_request(OTHER_STUDENT_ID, Month::January), some_stamp());
        ledger.append(build_request(SOME_STUDENT_ID, Month::March), some_stamp());

        let months: Vec<Month> = ledger
            .payments_for(SOME_STUDENT_ID)
            .into_iter()
            .map(|payment| payment.month)
            .collect();

        assert_eq!(months, vec![Month::January, Month::March]);
        assert!(ledger.payments_for(StudentId(999)).is_empty());
    }

    #[test]
    fn duplicate_month_rows_are_both_kept() {
        let mut ledger = PaymentLedger::new();

        ledger.append(build_request(SOME_STUDENT_ID, Month::January), some_stamp());
        ledger.append(build_request(SOME_STUDENT_ID, Month::January), some_stamp());

        assert_eq!(ledger.payments_for(SOME_STUDENT_ID).len(), 2);
    }

    #[test]
    fn remove_student_cascades_and_reindexes() {
        let mut ledger = PaymentLedger::new();

        ledger.append(build_request(SOME_STUDENT_ID, Month::January), some_stamp());
        ledger.append(build_request(OTHER_STUDENT_ID, Month::January), some_stamp());
        ledger.append(build_request(SOME_STUDENT_ID, Month::March), some_stamp());

        let removed = ledger.remove_student(SOME_STUDENT_ID);

        assert_eq!(removed, 2);
        assert_eq!(ledger.len(), 1);
        assert!(ledger.payments_for(SOME_STUDENT_ID).is_empty());

        // The surviving student's rows must still resolve after reindexing.
        let months: Vec<Month> = ledger
            .payments_for(OTHER_STUDENT_ID)
            .into_iter()
            .map(|payment| payment.month)
            .collect();

        assert_eq!(months, vec![Month::January]);
    }

    #[test]
    fn remove_student_with_no_rows_is_a_no_op() {
        let mut ledger = PaymentLedger::new();

        ledger.append(build_request(SOME_STUDENT_ID, Month::January), some_stamp());

        assert_eq!(ledger.remove_student(OTHER_STUDENT_ID), 0);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn receipts_stay_unique_after_a_cascade() {
        let mut ledger = PaymentLedger::new();

        ledger.append(build_request(SOME_STUDENT_ID, Month::January), some_stamp());
        ledger.remove_student(SOME_STUDENT_ID);

        let receipt = ledger.append(build_request(OTHER_STUDENT_ID, Month::May), some_stamp());

        assert_eq!(receipt, ReceiptId(1));
    }
}
