// File: crates/chart-core/src/types.rs
// Summary: Shared layout types and the dashboard's canvas presets.

use crate::geometry::Point;

/// Default canvas width in pixels.
pub const WIDTH: f64 = 1400.0;
/// Default canvas height in pixels.
pub const HEIGHT: f64 = 700.0;

/// Canvas size and margins for one render pass.
/// Contract: margins are non-negative; inner extents clamp at zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl ChartLayout {
    /// Layout with no margins.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height, margin_top: 0.0, margin_right: 0.0, margin_bottom: 0.0, margin_left: 0.0 }
    }

    pub const fn with_margins(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.margin_top = top;
        self.margin_right = right;
        self.margin_bottom = bottom;
        self.margin_left = left;
        self
    }

    /// Cumulative XP line chart.
    pub const fn xp_progress() -> Self {
        Self::new(WIDTH, HEIGHT).with_margins(40.0, 40.0, 60.0, 60.0)
    }

    /// Given/received audit bar.
    pub const fn audit_ratio() -> Self {
        Self::new(350.0, 150.0)
    }

    /// XP per project; the bottom margin leaves room for rotated labels.
    pub const fn project_bars() -> Self {
        Self::new(WIDTH, HEIGHT).with_margins(40.0, 40.0, 120.0, 60.0)
    }

    /// Plot width (width minus horizontal margins).
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin_left - self.margin_right).max(0.0)
    }

    /// Plot height (height minus vertical margins).
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin_top - self.margin_bottom).max(0.0)
    }

    /// Translation from canvas space to plot space.
    pub fn origin(&self) -> Point {
        Point::new(self.margin_left, self.margin_top)
    }
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::xp_progress()
    }
}
