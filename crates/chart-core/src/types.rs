// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (chart dimensions, margins, viewport).

/// Default chart width in pixels.
pub const WIDTH: i32 = 958;
/// Default chart height in pixels.
pub const HEIGHT: i32 = 500;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(80, 30, 20, 30)
    }
}

/// Pixel viewport a chart is laid out into: outer size plus plot margins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
}

impl Viewport {
    pub const fn new(width: i32, height: i32, insets: Insets) -> Self {
        Self { width, height, insets }
    }

    /// Left edge of the plot area.
    pub const fn plot_left(&self) -> f64 { self.insets.left as f64 }
    /// Right edge of the plot area.
    pub const fn plot_right(&self) -> f64 { (self.width - self.insets.right as i32) as f64 }
    /// Top edge of the plot area.
    pub const fn plot_top(&self) -> f64 { self.insets.top as f64 }
    /// Bottom edge of the plot area.
    pub const fn plot_bottom(&self) -> f64 { (self.height - self.insets.bottom as i32) as f64 }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::default())
    }
}
