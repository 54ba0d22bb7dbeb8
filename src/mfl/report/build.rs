use super::table::{Cell, ReportTable};
use crate::engine::{MonthStatus, MonthwiseMatrix, PaidSummary, UnpaidSummary};
use crate::models::{Month, Student};

const PAID_MARK: &str = "PAID";
const DUE_MARK: &str = "DUE";

fn labels(months: &[Month]) -> String {
    let labels: Vec<&str> = months.iter().map(|month| month.label()).collect();

    return labels.join(", ");
}

/// Twelve-row statement table for one student. The totals trailer is
/// synthesized from the money cells, so it always agrees with the body.
pub fn detail_table(student: &Student, entries: &[MonthStatus; 12]) -> ReportTable {
    let mut table = ReportTable::new(
        format!("Fee statement: {} ({})", student.name, student.id),
        vec![
            "Month".to_string(),
            "Status".to_string(),
            "Monthly".to_string(),
            "Food".to_string(),
            "Other".to_string(),
        ],
    );

    for entry in entries {
        if entry.paid {
            table.push_row(vec![
                Cell::text(entry.month.label()),
                Cell::text(PAID_MARK),
                Cell::money(entry.monthly_fee),
                Cell::money(entry.food_fee),
                Cell::money(entry.other_fee),
            ]);
        } else {
            table.push_row(vec![
                Cell::text(entry.month.label()),
                Cell::text("UNPAID"),
                Cell::empty(),
                Cell::empty(),
                Cell::empty(),
            ]);
        }
    }

    return table;
}

pub fn paid_summary_table(summary: &PaidSummary) -> ReportTable {
    let mut table = ReportTable::new(
        "Paid students",
        vec![
            "Class".to_string(),
            "ID".to_string(),
            "Name".to_string(),
            "Months Paid".to_string(),
            "Monthly".to_string(),
            "Food".to_string(),
            "Other".to_string(),
            "Grand Total".to_string(),
            "Fees By Month".to_string(),
        ],
    );

    for section in &summary.sections {
        for row in &section.rows {
            table.push_row(vec![
                Cell::text(section.class_name.label()),
                Cell::text(row.student_id.to_string()),
                Cell::text(row.name.clone()),
                Cell::text(labels(&row.paid_months)),
                Cell::money(row.totals.total_monthly),
                Cell::money(row.totals.total_food),
                Cell::money(row.totals.total_other),
                Cell::money(row.totals.grand_total),
                Cell::text(row.month_fees.clone()),
            ]);
        }
    }

    return table;
}

pub fn unpaid_summary_table(summary: &UnpaidSummary) -> ReportTable {
    let mut table = ReportTable::new(
        "Unpaid students",
        vec![
            "Class".to_string(),
            "ID".to_string(),
            "Name".to_string(),
            "Father".to_string(),
            "Mobile".to_string(),
            "Unpaid Months".to_string(),
            "Paid Count".to_string(),
            "Unpaid Count".to_string(),
            "Paid Total".to_string(),
        ],
    );

    for section in &summary.sections {
        for row in &section.rows {
            table.push_row(vec![
                Cell::text(section.class_name.label()),
                Cell::text(row.student_id.to_string()),
                Cell::text(row.name.clone()),
                Cell::text(row.father_name.clone()),
                Cell::text(row.mobile.clone()),
                Cell::text(labels(&row.unpaid_months)),
                Cell::count(row.paid_months_count),
                Cell::count(row.unpaid_months_count),
                Cell::money(row.paid_total),
            ]);
        }
    }

    return table;
}

pub fn monthwise_table(matrix: &MonthwiseMatrix) -> ReportTable {
    let mut columns = vec!["Class".to_string(), "ID".to_string(), "Name".to_string()];

    for month in &matrix.months {
        columns.push(month.label().to_string());
    }

    columns.push("Paid Count".to_string());
    columns.push("Total Due".to_string());

    let mut table = ReportTable::new("Month-wise status", columns);

    for row in &matrix.rows {
        let mut cells = vec![
            Cell::text(row.class_name.label()),
            Cell::text(row.student_id.to_string()),
            Cell::text(row.name.clone()),
        ];

        for paid in &row.statuses {
            cells.push(Cell::text(if *paid { PAID_MARK } else { DUE_MARK }));
        }

        cells.push(Cell::count(row.paid_months_count));
        cells.push(Cell::money(row.total_due));

        table.push_row(cells);
    }

    return table;
}
