// File: crates/chart-core/src/stack.rs
// Summary: Series Builder: per-column cumulative (lower, upper) bands aligned to rows.

use crate::error::ChartError;
use crate::table::Table;
use chrono::NaiveDate;

/// Cumulative band one column occupies at one row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub lower: f64,
    pub upper: f64,
}

/// One column's ordered bands, row-aligned with `StackedSeries::dates`.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedColumn {
    pub key: String,
    pub bands: Vec<Band>,
}

/// Stacked layout for a whole table.
///
/// Invariants per row index i:
/// - the first column's `lower` is 0,
/// - each column's `upper` equals the next column's `lower`,
/// - the last column's `upper` is the sum of all column values at that row.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedSeries {
    pub dates: Vec<NaiveDate>,
    pub columns: Vec<StackedColumn>,
}

impl StackedSeries {
    /// Largest upper bound across all columns and rows (0 when no columns).
    pub fn max_upper(&self) -> f64 {
        self.columns
            .iter()
            .flat_map(|c| c.bands.iter())
            .map(|b| b.upper)
            .fold(0.0, f64::max)
    }

    pub fn column(&self, key: &str) -> Option<&StackedColumn> {
        self.columns.iter().find(|c| c.key == key)
    }
}

/// Build the stacked series for `table`.
///
/// For each row a running total starts at 0; each column in set order
/// occupies `(total, total + value)` and then advances the total.
/// An empty column set yields an empty stack; an empty table is an error
/// because no domain can be derived from it.
pub fn build_stack(table: &Table) -> Result<StackedSeries, ChartError> {
    if table.is_empty() {
        return Err(ChartError::InvalidInput("no rows to stack".into()));
    }

    let mut columns: Vec<StackedColumn> = table
        .columns()
        .iter()
        .map(|key| StackedColumn { key: key.clone(), bands: Vec::with_capacity(table.len()) })
        .collect();

    let mut dates = Vec::with_capacity(table.len());
    for row in table.rows() {
        dates.push(row.date);
        let mut total = 0.0;
        for column in columns.iter_mut() {
            let value = row.number(&column.key);
            column.bands.push(Band { lower: total, upper: total + value });
            total += value;
        }
    }

    Ok(StackedSeries { dates, columns })
}
