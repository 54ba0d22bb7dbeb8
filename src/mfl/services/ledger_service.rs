use crate::ids::{ReceiptId, StudentId};
use crate::models::{ClassName, FeeSchedule, Month, Payment, PaymentRequest, Student};
use crate::{PaymentLedger, Result, Snapshot, StudentDirectory};

use std::collections::HashMap;

use chrono::Utc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerServiceError {
    #[error("Payment references unknown student: {0}")]
    UnknownStudent(StudentId),
}

/// The single write surface over directory, ledger, and active schedule.
/// Every method takes `&mut self`, so writes are serialized by the
/// exclusive borrow; reports read through `snapshot()` instead.
pub struct LedgerService {
    directory: StudentDirectory,
    ledger: PaymentLedger,
    schedule: FeeSchedule,
}

impl LedgerService {
    pub fn new(
        directory: StudentDirectory,
        ledger: PaymentLedger,
        schedule: FeeSchedule,
    ) -> Self {
        return Self {
            directory,
            ledger,
            schedule,
        };
    }

    pub fn register_student(&mut self, student: Student) -> Result {
        log::debug!("Registering student: {student:?}");

        return self.directory.register(student);
    }

    pub fn update_student(&mut self, student: Student) -> Result {
        log::debug!("Updating student: {student:?}");

        return self.directory.update(student);
    }

    /// Removes the student and every one of their ledger rows as one unit.
    /// Returns the removed profile and the number of cascaded rows.
    pub fn delete_student(&mut self, id: StudentId) -> Result<(Student, usize)> {
        log::debug!("Deleting student {id} with payment cascade");

        let student = self.directory.remove(id)?;
        let removed = self.ledger.remove_student(id);

        log::debug!("Cascade removed {removed} payment rows for student {id}");

        return Ok((student, removed));
    }

    /// Appends a fee receipt, fully recorded or not at all. A payment for a
    /// student the directory does not know is rejected before anything is
    /// written.
    pub fn record_payment(&mut self, request: PaymentRequest) -> Result<ReceiptId> {
        if !self.directory.contains(request.student_id) {
            Err(LedgerServiceError::UnknownStudent(request.student_id))?
        }

        let recorded_at = request.recorded_at.unwrap_or_else(Utc::now);
        let receipt = self.ledger.append(request, recorded_at);

        log::debug!("Recorded payment under receipt {receipt}");

        return Ok(receipt);
    }

    /// Replaces the active schedule wholesale. Rows already in the ledger
    /// keep the amounts they were recorded with.
    pub fn upsert_fee_schedule(&mut self, schedule: FeeSchedule) {
        log::debug!("Replacing active fee schedule: {schedule:?}");

        self.schedule = schedule;
    }

    pub fn active_fee_schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    pub fn list_students(&self, class_name: Option<ClassName>) -> Vec<Student> {
        self.directory.list(class_name)
    }

    pub fn list_payments(&self, student_id: StudentId) -> Vec<&Payment> {
        self.ledger.payments_for(student_id)
    }

    /// Ledger rows narrowed by class or month, for office review screens.
    pub fn list_payments_matching(
        &self,
        class_name: Option<ClassName>,
        month: Option<Month>,
    ) -> Vec<&Payment> {
        return self
            .ledger
            .history()
            .iter()
            .filter(|payment| month.map_or(true, |m| payment.month == m))
            .filter(|payment| {
                class_name.map_or(true, |c| {
                    self.directory
                        .get(payment.student_id)
                        .map_or(false, |student| student.class_name == c)
                })
            })
            .collect();
    }

    /// Captures the consistent view the aggregation engine computes over.
    pub fn snapshot(&self) -> Snapshot {
        let students = self.directory.list(None);

        let mut payments: HashMap<StudentId, Vec<Payment>> = HashMap::new();

        for payment in self.ledger.history() {
            payments
                .entry(payment.student_id)
                .or_default()
                .push(payment.clone());
        }

        return Snapshot::new(students, payments, self.schedule);
    }
}
