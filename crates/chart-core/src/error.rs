// File: crates/chart-core/src/error.rs
// Summary: Error types for the layout pipeline.

use thiserror::Error;

/// Errors produced while deriving chart layout from tabular data.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The input cannot support a layout (e.g. a table with no rows).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// No rows to derive a scale domain from. Non-retryable.
    #[error("empty domain: no rows to derive scales from")]
    EmptyDomain,
}
