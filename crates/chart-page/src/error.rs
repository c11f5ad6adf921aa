// File: crates/chart-page/src/error.rs
// Summary: Error type for the fetch-then-render pipeline.

use thiserror::Error;

/// Anything that can stop one resource's chart from rendering.
/// Callers log these and move on; a failed resource never aborts the host.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] std::io::Error),
    #[error("http fetch failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("csv parse failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("first CSV column must be 'date', got {0:?}")]
    BadHeader(String),
    #[error("bad date {value:?}: {source}")]
    Date {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error(transparent)]
    Chart(#[from] chart_core::ChartError),
}
