// File: crates/chart-core/src/area.rs
// Summary: Path Generator: closed filled-area outlines for one stacked column.

use crate::scale::{TimeScale, ValueScale};
use crate::stack::StackedColumn;
use chrono::NaiveDate;

/// Geometry of one column's filled band: one or more closed outlines in
/// pixel space. Each outline traces the upper boundary left to right, then
/// the lower boundary right to left; renderers close it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AreaPath {
    pub outlines: Vec<Vec<(f64, f64)>>,
}

impl AreaPath {
    pub fn is_empty(&self) -> bool {
        self.outlines.is_empty()
    }
}

/// Trace the filled outline(s) for `column`.
///
/// Rows whose band is non-finite are dropped silently and split the area
/// into separate closed runs, the way an area generator treats undefined
/// points as gaps rather than failing the whole path.
pub fn area_outlines(
    column: &StackedColumn,
    dates: &[NaiveDate],
    x: &TimeScale,
    y: &ValueScale,
) -> AreaPath {
    let mut path = AreaPath::default();
    let mut run: Vec<(usize, f64)> = Vec::new(); // (row index, x pixel)

    let mut flush = |run: &mut Vec<(usize, f64)>| {
        if run.is_empty() {
            return;
        }
        let mut outline = Vec::with_capacity(run.len() * 2);
        for &(i, px) in run.iter() {
            outline.push((px, y.y(column.bands[i].upper)));
        }
        for &(i, px) in run.iter().rev() {
            outline.push((px, y.y(column.bands[i].lower)));
        }
        path.outlines.push(outline);
        run.clear();
    };

    for (i, (&date, band)) in dates.iter().zip(column.bands.iter()).enumerate() {
        if band.lower.is_finite() && band.upper.is_finite() {
            run.push((i, x.x(date)));
        } else {
            flush(&mut run);
        }
    }
    flush(&mut run);
    path
}
