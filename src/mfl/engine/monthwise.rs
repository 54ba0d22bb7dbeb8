use super::month_status::month_status;
use super::scope::ReportScope;
use crate::ids::StudentId;
use crate::models::{ClassName, Month};
use crate::{Money, Result, Snapshot};

/// One row per student with a paid/unpaid cell per selected month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixRow {
    pub student_id: StudentId,
    pub name: String,
    pub class_name: ClassName,
    /// Parallel to `MonthwiseMatrix::months`.
    pub statuses: Vec<bool>,
    pub paid_months_count: u32,
    /// What the student currently owes for the remainder of the year,
    /// projected from the ACTIVE schedule rather than historical rows.
    pub total_due: Money,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthwiseMatrix {
    pub months: Vec<Month>,
    pub rows: Vec<MatrixRow>,
}

/// Month-wise status matrix over every student in scope. Unlike the
/// summaries, the due figure here is a projection from the current
/// schedule: (12 - paid months) x the class's monthly total.
pub fn monthwise_matrix(snapshot: &Snapshot, scope: &ReportScope) -> Result<MonthwiseMatrix> {
    let months = scope.months();
    let mut rows = vec![];

    for class_name in scope.classes() {
        let monthly_total = snapshot.schedule().monthly_total_for(class_name)?;

        for student in snapshot.students_in(class_name) {
            let entries = month_status(student, snapshot.payments_for(student.id))?;

            let paid_months_count = entries.iter().filter(|entry| entry.paid).count() as u32;

            let statuses = months
                .iter()
                .map(|month| entries[month.index()].paid)
                .collect();

            rows.push(MatrixRow {
                student_id: student.id,
                name: student.name.clone(),
                class_name: student.class_name,
                statuses,
                paid_months_count,
                total_due: monthly_total.times(12 - paid_months_count)?,
            });
        }
    }

    return Ok(MonthwiseMatrix { months, rows });
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::engine::test_support::{build_snapshot, paid_hifz, paid_nazera, unpaid_kitab};

    #[test]
    fn every_student_in_scope_gets_a_row() {
        let snapshot = build_snapshot();
        let matrix = monthwise_matrix(&snapshot, &ReportScope::full_year()).unwrap();

        let ids: Vec<StudentId> = matrix.rows.iter().map(|row| row.student_id).collect();

        // Fully unpaid students still appear; order is class then id.
        assert_eq!(ids, vec![paid_nazera(), paid_hifz(), unpaid_kitab()]);
    }

    #[test]
    fn total_due_projects_from_the_current_schedule() {
        let snapshot = build_snapshot();
        let matrix = monthwise_matrix(&snapshot, &ReportScope::full_year()).unwrap();

        let hifz_row = matrix
            .rows
            .iter()
            .find(|row| row.student_id == paid_hifz())
            .unwrap();

        // 10 remaining months x (500 + 50 + 200) under the active schedule.
        assert_eq!(hifz_row.total_due, Money(750000));

        let kitab_row = matrix
            .rows
            .iter()
            .find(|row| row.student_id == unpaid_kitab())
            .unwrap();

        // Kitab carries no food fee: 12 x (500 + 50).
        assert_eq!(kitab_row.total_due, Money(660000));
    }

    #[test]
    fn status_cells_follow_the_calendar() {
        let snapshot = build_snapshot();
        let matrix = monthwise_matrix(&snapshot, &ReportScope::full_year()).unwrap();

        assert_eq!(matrix.months, Month::ALL.to_vec());

        let hifz_row = matrix
            .rows
            .iter()
            .find(|row| row.student_id == paid_hifz())
            .unwrap();

        assert!(hifz_row.statuses[Month::January.index()]);
        assert!(!hifz_row.statuses[Month::February.index()]);
        assert!(hifz_row.statuses[Month::March.index()]);
    }

    #[test]
    fn month_filter_narrows_columns_but_not_the_projection() {
        let snapshot = build_snapshot();

        let scope = ReportScope::parse(None, Some("1")).unwrap();
        let matrix = monthwise_matrix(&snapshot, &scope).unwrap();

        assert_eq!(matrix.months, vec![Month::January]);

        let hifz_row = matrix
            .rows
            .iter()
            .find(|row| row.student_id == paid_hifz())
            .unwrap();

        assert_eq!(hifz_row.statuses, vec![true]);
        // The due amount stays a full-year projection.
        assert_eq!(hifz_row.paid_months_count, 2);
        assert_eq!(hifz_row.total_due, Money(750000));
    }
}
