// File: crates/chart-render-svg/src/lib.rs
// Summary: SVG renderer crate: chart drawing, legend swatches, markup escaping.

pub mod escape;
pub mod legend;
pub mod svg;

pub use escape::{entity, escape_attr, escape_text};
pub use legend::swatch_items;
pub use svg::{path_d, SvgRenderer};
