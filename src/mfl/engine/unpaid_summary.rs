use super::month_status::{month_status, student_totals, unpaid_months};
use super::scope::ReportScope;
use super::ClassSection;
use crate::ids::StudentId;
use crate::models::{ClassName, Month, Student};
use crate::{Money, Result, Snapshot};

/// One student's row in the unpaid roster. Father name and mobile ride
/// along so the office can follow up without opening the profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnpaidRow {
    pub student_id: StudentId,
    pub name: String,
    pub father_name: String,
    pub mobile: String,
    pub class_name: ClassName,
    pub unpaid_months: Vec<Month>,
    /// Always out of 12, never out of the filtered window, so partial-year
    /// students read correctly.
    pub paid_months_count: u32,
    pub unpaid_months_count: u32,
    /// Historical receipts for the year, from the stored amounts.
    pub paid_total: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnpaidSummary {
    pub sections: Vec<ClassSection<UnpaidRow>>,
}

impl UnpaidSummary {
    pub fn rows(&self) -> impl Iterator<Item = &UnpaidRow> {
        self.sections.iter().flat_map(|section| section.rows.iter())
    }
}

/// Students with at least one unpaid month in scope, grouped by class.
/// The mirror image of the paid roster, keyed on missing months.
pub fn unpaid_summary(snapshot: &Snapshot, scope: &ReportScope) -> Result<UnpaidSummary> {
    let mut sections = vec![];

    for class_name in scope.classes() {
        let mut rows = vec![];

        for student in snapshot.students_in(class_name) {
            if let Some(row) = unpaid_row(snapshot, scope, student)? {
                rows.push(row);
            }
        }

        if !rows.is_empty() {
            sections.push(ClassSection { class_name, rows });
        }
    }

    return Ok(UnpaidSummary { sections });
}

fn unpaid_row(
    snapshot: &Snapshot,
    scope: &ReportScope,
    student: &Student,
) -> Result<Option<UnpaidRow>> {
    let entries = month_status(student, snapshot.payments_for(student.id))?;
    let unpaid = unpaid_months(&entries);

    let any_in_scope = unpaid.iter().any(|month| scope.includes_month(*month));

    if !any_in_scope {
        return Ok(None);
    }

    let unpaid_count = unpaid.len() as u32;
    let totals = student_totals(&entries)?;

    return Ok(Some(UnpaidRow {
        student_id: student.id,
        name: student.name.clone(),
        father_name: student.father_name.clone(),
        mobile: student.mobile.clone(),
        class_name: student.class_name,
        unpaid_months: unpaid,
        paid_months_count: 12 - unpaid_count,
        unpaid_months_count: unpaid_count,
        paid_total: totals.grand_total,
    }));
}
