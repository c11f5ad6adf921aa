// File: crates/chart-page/src/loader.rs
// Summary: CSV parsing into the core Table model.

use crate::error::DrawError;
use chart_core::{Row, Table};
use chrono::NaiveDate;

const DATE_COLUMN: &str = "date";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse CSV bytes into a [`Table`].
///
/// The header must start with a `date` column; the remaining header order
/// becomes the column set (and so the stacking order). Cell text is kept
/// raw so downstream numeric reads can treat malformed values as 0.
pub fn parse_csv(bytes: &[u8]) -> Result<Table, DrawError> {
    let mut reader = csv::Reader::from_reader(bytes);
    let headers = reader.headers()?.clone();
    let mut names = headers.iter();
    match names.next() {
        Some(DATE_COLUMN) => {}
        other => return Err(DrawError::BadHeader(other.unwrap_or("").to_string())),
    }
    let columns: Vec<String> = names.map(str::to_string).collect();

    let mut table = Table::new(columns.clone());
    for record in reader.records() {
        let record = record?;
        let raw_date = record.get(0).unwrap_or("");
        let date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT)
            .map_err(|source| DrawError::Date { value: raw_date.to_string(), source })?;
        let mut row = Row::new(date);
        for (name, cell) in columns.iter().zip(record.iter().skip(1)) {
            row.set(name.clone(), cell);
        }
        table.push_row(row);
    }
    Ok(table)
}
