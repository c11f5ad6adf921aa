// File: crates/chart-page/src/lib.rs
// Summary: Page crate entry point: CSV fetch, parse, draw orchestration, HTML sink.

pub mod draw;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod page;

pub use draw::{draw_resource, render_resource, DrawOptions, RenderedResource};
pub use error::DrawError;
pub use fetch::{CsvFetch, FileFetch, HttpFetch};
pub use loader::parse_csv;
pub use page::{DomSink, HtmlPage};
