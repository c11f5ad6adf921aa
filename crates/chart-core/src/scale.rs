// File: crates/chart-core/src/scale.rs
// Summary: UTC time (X) and linear value (Y) scale transforms.

use crate::error::ChartError;
use crate::stack::StackedSeries;
use crate::table::Table;
use crate::ticks::nice_interval;
use crate::types::Viewport;
use chrono::{NaiveDate, NaiveTime};

/// Default tick count used when nicing the value domain.
pub const NICE_COUNT: usize = 10;

fn utc_seconds(date: NaiveDate) -> f64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp() as f64
}

/// Horizontal scale: linear in UTC time from a date domain to a pixel range.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    domain: (NaiveDate, NaiveDate),
    t0: f64,
    t1: f64,
    r0: f64,
    r1: f64,
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        let t0 = utc_seconds(domain.0);
        let mut t1 = utc_seconds(domain.1);
        if (t1 - t0).abs() < 1e-9 {
            // Degenerate single-date domain: widen by one day so x() stays defined.
            t1 = t0 + 86_400.0;
        }
        Self { domain, t0, t1, r0: range.0, r1: range.1 }
    }

    /// Map a date to an x pixel. Monotonic non-decreasing in the date.
    #[inline]
    pub fn x(&self, date: NaiveDate) -> f64 {
        let t = utc_seconds(date);
        self.r0 + (t - self.t0) / (self.t1 - self.t0) * (self.r1 - self.r0)
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) { self.domain }

    pub fn range(&self) -> (f64, f64) { (self.r0, self.r1) }
}

/// Vertical scale: linear value to pixel, inverted so 0 sits at the bottom.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    v0: f64,
    v1: f64,
    r0: f64,
    r1: f64,
}

impl ValueScale {
    /// `range` is (bottom, top) in pixels; `range.0 > range.1` for the usual
    /// inverted orientation.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { v0: domain.0, v1: domain.1, r0: range.0, r1: range.1 }
    }

    /// Widen the domain outward to clean tick multiples.
    pub fn nice(mut self, count: usize) -> Self {
        let (lo, hi) = nice_interval(self.v0, self.v1, count);
        self.v0 = lo;
        self.v1 = hi;
        self
    }

    /// Map a value to a y pixel. Monotonic non-increasing in the value.
    #[inline]
    pub fn y(&self, value: f64) -> f64 {
        let span = (self.v1 - self.v0).abs().max(1e-12) * (self.v1 - self.v0).signum();
        self.r0 + (value - self.v0) / span * (self.r1 - self.r0)
    }

    pub fn domain(&self) -> (f64, f64) { (self.v0, self.v1) }

    pub fn range(&self) -> (f64, f64) { (self.r0, self.r1) }
}

/// Build both scales for a stacked layout.
///
/// X domain is the table's date extent mapped across the plot width; Y domain
/// is `[0, max upper]`, niced, mapped bottom-up across the plot height.
/// Pure and deterministic; fails only when no rows exist to take an extent of.
pub fn build_scales(
    stack: &StackedSeries,
    table: &Table,
    viewport: &Viewport,
) -> Result<(TimeScale, ValueScale), ChartError> {
    let extent = table.date_extent().ok_or(ChartError::EmptyDomain)?;
    let x = TimeScale::new(extent, (viewport.plot_left(), viewport.plot_right()));
    let y = ValueScale::new(
        (0.0, stack.max_upper()),
        (viewport.plot_bottom(), viewport.plot_top()),
    )
    .nice(NICE_COUNT);
    Ok((x, y))
}
