use mfl::Result;

use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;

/// Reads every well-formed row of a snapshot file. Rows the csv layer
/// cannot deserialize are logged and skipped; domain-level parsing happens
/// later, record by record.
pub fn read_rows<T>(filepath: &Path) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_path(filepath)?;

    let mut rows = vec![];

    for record in reader.deserialize::<T>() {
        match record {
            Ok(row) => rows.push(row),
            Err(e) => log::warn!("{e}"),
        }
    }

    return Ok(rows);
}
