//! CSV adapter.
//!
//! Bridges a CSV byte stream (however the host acquired it) into a
//! `RawTable`. Headers become the raw column labels; fields become `Empty`,
//! `Number`, or `Text` cells. Fetching, caching, and refresh cadence stay
//! with the host.

use crate::IngestError;
use std::io::Read;
use std::path::Path;
use tabproj_core::{CellValue, RawTable};

/// Read a register from any CSV reader
pub fn read_csv<R: Read>(reader: R) -> Result<RawTable, IngestError> {
    let mut csv_reader = ::csv::Reader::from_reader(reader);

    let columns: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(str::to_string)
        .collect();

    let mut table = RawTable::new(columns);
    for record in csv_reader.records() {
        let record = record?;
        let row = record.iter().map(cell_from_field).collect();
        table.push_row(row)?;
    }
    Ok(table)
}

/// Read a register from a CSV file on disk
pub fn read_csv_file(path: &Path) -> Result<RawTable, IngestError> {
    let file = std::fs::File::open(path)?;
    read_csv(file)
}

/// Classify one CSV field as a cell value
fn cell_from_field(field: &str) -> CellValue {
    if field.trim().is_empty() {
        return CellValue::Empty;
    }
    match field.trim().parse::<f64>() {
        Ok(number) => CellValue::Number(number),
        Err(_) => CellValue::Text(field.to_string()),
    }
}
