// File: crates/chart-core/src/table.rs
// Summary: Tabular data model: dated rows of raw cells plus an ordered column set.

use chrono::NaiveDate;
use std::collections::HashMap;

/// One observation: a calendar date plus raw cell text keyed by column name.
///
/// Cells stay as source text; numeric access parses on demand so that
/// missing or malformed values read as 0 instead of poisoning the stack.
#[derive(Clone, Debug)]
pub struct Row {
    pub date: NaiveDate,
    cells: HashMap<String, String>,
}

impl Row {
    pub fn new(date: NaiveDate) -> Self {
        Self { date, cells: HashMap::new() }
    }

    /// Set a raw cell value for `column`.
    pub fn set(&mut self, column: impl Into<String>, raw: impl Into<String>) {
        self.cells.insert(column.into(), raw.into());
    }

    /// Raw cell text, if present.
    pub fn raw(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Numeric cell value. Missing, non-numeric, and non-finite cells read as 0.
    pub fn number(&self, column: &str) -> f64 {
        match self.cells.get(column).and_then(|raw| raw.trim().parse::<f64>().ok()) {
            Some(v) if v.is_finite() => v,
            _ => 0.0,
        }
    }
}

/// Rows plus the ordered column set (the date column excluded).
/// Column order is source order and determines stacking and paint order.
#[derive(Clone, Debug, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns, rows: Vec::new() }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] { &self.columns }

    pub fn rows(&self) -> &[Row] { &self.rows }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn len(&self) -> usize { self.rows.len() }

    /// Min/max date over all rows, or `None` for an empty table.
    /// Rows usually arrive sorted ascending but the extent does not rely on it.
    pub fn date_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.rows.iter().map(|r| r.date).min()?;
        let max = self.rows.iter().map(|r| r.date).max()?;
        Some((min, max))
    }
}
