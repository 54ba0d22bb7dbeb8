use super::table::{Cell, ReportTable};
use crate::Result;

use csv::Writer;

/// Serializes a report table: header, the rows in screen order, then the
/// synthesized grand-total trailer for money-bearing tables. Quoting and
/// escaping stay entirely inside the csv crate.
pub fn to_csv(table: &ReportTable) -> Result<String> {
    let mut writer = Writer::from_writer(vec![]);

    writer.write_record(table.columns())?;

    for row in table.rows() {
        writer.write_record(row.iter().map(Cell::display))?;
    }

    if let Some(trailer) = table.grand_total_row()? {
        writer.write_record(trailer.iter().map(Cell::display))?;
    }

    let utf8 = writer.into_inner()?;
    let string = String::from_utf8(utf8)?;

    return Ok(string);
}
