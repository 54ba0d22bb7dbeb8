use super::month_status::{month_status, paid_months, student_totals, StudentTotals};
use super::scope::ReportScope;
use super::ClassSection;
use crate::ids::StudentId;
use crate::models::{ClassName, Month, Student};
use crate::{Result, Snapshot};

/// One student's row in the paid roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaidRow {
    pub student_id: StudentId,
    pub name: String,
    pub class_name: ClassName,
    pub paid_months: Vec<Month>,
    pub totals: StudentTotals,
    /// Compact per-paid-month fee string, e.g. `January 750.00 | March 750.00`.
    pub month_fees: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaidSummary {
    pub sections: Vec<ClassSection<PaidRow>>,
}

impl PaidSummary {
    pub fn rows(&self) -> impl Iterator<Item = &PaidRow> {
        self.sections.iter().flat_map(|section| section.rows.iter())
    }
}

/// Students with at least one qualifying payment in scope, grouped by
/// class. Totals and the fee string always cover the student's full year;
/// the scope only decides who appears.
pub fn paid_summary(snapshot: &Snapshot, scope: &ReportScope) -> Result<PaidSummary> {
    let mut sections = vec![];

    for class_name in scope.classes() {
        let mut rows = vec![];

        for student in snapshot.students_in(class_name) {
            if let Some(row) = paid_row(snapshot, scope, student)? {
                rows.push(row);
            }
        }

        if !rows.is_empty() {
            sections.push(ClassSection { class_name, rows });
        }
    }

    return Ok(PaidSummary { sections });
}

fn paid_row(
    snapshot: &Snapshot,
    scope: &ReportScope,
    student: &Student,
) -> Result<Option<PaidRow>> {
    let entries = month_status(student, snapshot.payments_for(student.id))?;
    let paid = paid_months(&entries);

    let any_in_scope = paid.iter().any(|month| scope.includes_month(*month));

    if !any_in_scope {
        return Ok(None);
    }

    let mut fee_parts = vec![];

    for entry in entries.iter().filter(|entry| entry.paid) {
        fee_parts.push(format!(
            "{} {}",
            entry.month.label(),
            entry.qualifying_total()?
        ));
    }

    return Ok(Some(PaidRow {
        student_id: student.id,
        name: student.name.clone(),
        class_name: student.class_name,
        paid_months: paid,
        totals: student_totals(&entries)?,
        month_fees: fee_parts.join(" | "),
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::engine::test_support::{build_snapshot, paid_hifz, paid_nazera, unpaid_kitab};
    use crate::Money;

    #[test]
    fn groups_by_class_in_enumeration_order() {
        let snapshot = build_snapshot();
        let summary = paid_summary(&snapshot, &ReportScope::full_year()).unwrap();

        let classes: Vec<ClassName> = summary
            .sections
            .iter()
            .map(|section| section.class_name)
            .collect();

        // Nazera precedes hifz in the enumeration even though "hifz" sorts
        // first alphabetically.
        assert_eq!(classes, vec![ClassName::Nazera, ClassName::Hifz]);
    }

    #[test]
    fn students_without_payments_are_absent() {
        let snapshot = build_snapshot();
        let summary = paid_summary(&snapshot, &ReportScope::full_year()).unwrap();

        assert!(summary.rows().all(|row| row.student_id != unpaid_kitab()));
    }

    #[test]
    fn month_filter_selects_by_that_month() {
        let snapshot = build_snapshot();

        let scope = ReportScope::parse(None, Some("3")).unwrap();
        let summary = paid_summary(&snapshot, &scope).unwrap();

        // Only the hifz student paid March; the nazera student paid January.
        let ids: Vec<StudentId> = summary.rows().map(|row| row.student_id).collect();

        assert_eq!(ids, vec![paid_hifz()]);
    }

    #[test]
    fn row_totals_cover_the_full_year() {
        let snapshot = build_snapshot();

        let scope = ReportScope::parse(None, Some("1")).unwrap();
        let summary = paid_summary(&snapshot, &scope).unwrap();

        let hifz_row = summary
            .rows()
            .find(|row| row.student_id == paid_hifz())
            .unwrap();

        assert_eq!(hifz_row.totals.grand_total, Money(150000));
        assert_eq!(hifz_row.month_fees, "January 750.00 | March 750.00");
    }

    #[test]
    fn class_filter_narrows_the_sections() {
        let snapshot = build_snapshot();

        let scope = ReportScope::parse(Some("nazera"), None).unwrap();
        let summary = paid_summary(&snapshot, &scope).unwrap();

        assert_eq!(summary.sections.len(), 1);
        assert_eq!(summary.sections[0].class_name, ClassName::Nazera);
        assert_eq!(summary.sections[0].rows[0].student_id, paid_nazera());
    }
}
