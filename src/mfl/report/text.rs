use super::table::{Cell, ReportTable};
use crate::engine::{MonthStatus, StudentTotals};
use crate::models::Student;
use crate::Result;

const NO_RECORDS: &str = "No records to display.";
const FRAME: &str = "====================";

/// Width-aligned flat-text rendering of a report table: same rows, same
/// order, same trailer as the CSV body.
pub fn to_text(table: &ReportTable) -> Result<String> {
    let mut out = String::new();

    out.push_str(table.title());
    out.push('\n');

    if table.is_empty() {
        out.push_str(NO_RECORDS);
        out.push('\n');
        return Ok(out);
    }

    let trailer = table.grand_total_row()?;
    let widths = column_widths(table, trailer.as_deref());

    out.push_str(&render_line(table.columns().iter().map(String::as_str), &widths));
    out.push('\n');
    out.push_str(&rule(&widths));
    out.push('\n');

    for row in table.rows() {
        out.push_str(&render_line(row.iter().map(Cell::display), &widths));
        out.push('\n');
    }

    if let Some(trailer) = trailer {
        out.push_str(&rule(&widths));
        out.push('\n');
        out.push_str(&render_line(trailer.iter().map(Cell::display), &widths));
        out.push('\n');
    }

    return Ok(out);
}

/// Per-student flat-text statement in the office's submission layout.
pub fn student_narrative(
    student: &Student,
    entries: &[MonthStatus; 12],
    totals: &StudentTotals,
) -> String {
    let mut out = String::new();

    out.push_str(FRAME);
    out.push('\n');
    out.push_str(&format!("ID: {}\n", student.id));
    out.push_str(&format!("Name: {}\n", student.name));
    out.push_str(&format!("Father: {}\n", student.father_name));
    out.push_str(&format!("Address: {}\n", student.address));
    out.push_str(&format!("Class: {}\n", student.class_name.label()));
    out.push_str(&format!(
        "Mobile: {}\n",
        if student.mobile.is_empty() {
            "-"
        } else {
            &student.mobile
        }
    ));
    out.push_str(FRAME);
    out.push('\n');

    for entry in entries {
        if entry.paid {
            out.push_str(&format!(
                "{:<10} PAID    {:>10} {:>10} {:>10}\n",
                entry.month.label(),
                entry.monthly_fee.to_string(),
                entry.food_fee.to_string(),
                entry.other_fee.to_string(),
            ));
        } else {
            out.push_str(&format!("{:<10} UNPAID\n", entry.month.label()));
        }
    }

    out.push_str(FRAME);
    out.push('\n');
    out.push_str(&format!("Monthly total: {}\n", totals.total_monthly));
    out.push_str(&format!("Food total: {}\n", totals.total_food));
    out.push_str(&format!("Other total: {}\n", totals.total_other));
    out.push_str(&format!("Grand total: {}\n", totals.grand_total));
    out.push_str(FRAME);
    out.push('\n');

    return out;
}

fn column_widths(table: &ReportTable, trailer: Option<&[Cell]>) -> Vec<usize> {
    let mut widths: Vec<usize> = table
        .columns()
        .iter()
        .map(|column| column.chars().count())
        .collect();

    let trailer_row = trailer.map(|cells| cells.to_vec());
    let rows = table.rows().iter().chain(trailer_row.as_ref());

    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            let width = cell.display().chars().count();

            if width > widths[index] {
                widths[index] = width;
            }
        }
    }

    return widths;
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let rendered: Vec<String> = cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();

    return rendered.join("  ").trim_end().to_string();
}

fn rule(widths: &[usize]) -> String {
    let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);

    return "-".repeat(total);
}
