// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the stacked-area layout pipeline.

pub mod area;
pub mod color;
pub mod error;
pub mod frame;
pub mod scale;
pub mod stack;
pub mod table;
pub mod ticks;
pub mod types;

pub use area::{area_outlines, AreaPath};
pub use color::{OrdinalColors, PAIRED};
pub use error::ChartError;
pub use frame::{ChartFrame, Layer, LegendEntry, Renderer};
pub use scale::{build_scales, TimeScale, ValueScale};
pub use stack::{build_stack, Band, StackedColumn, StackedSeries};
pub use table::{Row, Table};
pub use ticks::{time_ticks, value_ticks, TimeTick};
pub use types::{Insets, Viewport, HEIGHT, WIDTH};
