// File: crates/chart-core/src/frame.rs
// Summary: ChartFrame composition: stack -> scales -> outlines -> colors, plus the render port.

use crate::area::{area_outlines, AreaPath};
use crate::color::OrdinalColors;
use crate::error::ChartError;
use crate::scale::{build_scales, TimeScale, ValueScale};
use crate::stack::build_stack;
use crate::table::Table;
use crate::types::Viewport;

/// One drawable band: a column key, its fill color, and its outline geometry.
/// Layers are ordered by column position, which is also paint order.
#[derive(Clone, Debug)]
pub struct Layer {
    pub key: String,
    pub color: &'static str,
    pub path: AreaPath,
}

/// A color swatch paired with its column label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: String,
    pub color: &'static str,
}

/// Everything a renderer needs to draw one chart. Derived, read-only, and
/// recomputed in full on every call; nothing here persists across renders.
#[derive(Clone, Debug)]
pub struct ChartFrame {
    pub viewport: Viewport,
    pub layers: Vec<Layer>,
    pub x_scale: TimeScale,
    pub y_scale: ValueScale,
}

impl ChartFrame {
    /// Run the whole transformation pipeline for `table`.
    pub fn compute(table: &Table, viewport: &Viewport) -> Result<Self, ChartError> {
        let stack = build_stack(table)?;
        let (x_scale, y_scale) = build_scales(&stack, table, viewport)?;
        let colors = OrdinalColors::new(table.columns());

        let layers = stack
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| Layer {
                key: column.key.clone(),
                color: colors.color(&column.key).unwrap_or(OrdinalColors::by_index(i)),
                path: area_outlines(column, &stack.dates, &x_scale, &y_scale),
            })
            .collect();

        Ok(Self { viewport: *viewport, layers, x_scale, y_scale })
    }

    /// Legend entries in column order, colored like the layers.
    pub fn legend(&self) -> Vec<LegendEntry> {
        self.layers
            .iter()
            .map(|l| LegendEntry { label: l.key.clone(), color: l.color })
            .collect()
    }
}

/// Drawing backend port. The core hands over layers in paint order plus both
/// scales for axes and never looks inside the produced drawable.
pub trait Renderer {
    type Output;

    fn render(&self, frame: &ChartFrame) -> Self::Output;
}
