use crate::ids::StudentId;
use crate::models::{ClassName, FeeSchedule, Payment, Student};

use std::collections::HashMap;

/// Immutable view of directory, ledger, and schedule taken once per report
/// request. The engine reads only snapshots, so a report is a pure
/// computation that can be discarded and safely re-run.
#[derive(Debug, Clone)]
pub struct Snapshot {
    students: Vec<Student>,
    payments: HashMap<StudentId, Vec<Payment>>,
    schedule: FeeSchedule,
}

impl Snapshot {
    pub fn new(
        mut students: Vec<Student>,
        payments: HashMap<StudentId, Vec<Payment>>,
        schedule: FeeSchedule,
    ) -> Self {
        // Report order is fixed here once, so every consumer iterates the
        // same way: class enumeration order, then id ascending.
        students.sort_by_key(|student| (student.class_name, student.id));

        return Self {
            students,
            payments,
            schedule,
        };
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn students_in(&self, class_name: ClassName) -> Vec<&Student> {
        return self
            .students
            .iter()
            .filter(|student| student.class_name == class_name)
            .collect();
    }

    pub fn find_student(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|student| student.id == id)
    }

    pub fn payments_for(&self, id: StudentId) -> &[Payment] {
        self.payments.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }
}
