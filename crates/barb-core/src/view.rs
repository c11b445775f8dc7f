// File: crates/barb-core/src/view.rs
// Summary: Per-frame render context: canvas size, plot rect and the data-to-pixel scales.

use crate::extent::AxisLimits;
use crate::geometry::RectI32;
use crate::scale::{LinearScale, ScaleTransform};
use crate::types::Insets;

/// Concrete `ScaleTransform` for a plot rect inside a canvas. Built by the host
/// for each frame from its current axis limits.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext {
    pub width: i32,
    pub height: i32,
    plot: RectI32,
    limits: AxisLimits,
    x: LinearScale,
    y: LinearScale,
}

impl RenderContext {
    pub fn new(width: i32, height: i32, insets: Insets, limits: AxisLimits) -> Self {
        let left = insets.left as i32;
        let top = insets.top as i32;
        let right = (width - insets.right as i32).max(left + 1);
        let bottom = (height - insets.bottom as i32).max(top + 1);
        let plot = RectI32::from_ltrb(left, top, right, bottom);
        Self::with_plot_rect(width, height, plot, limits)
    }

    /// Use an explicit plot rect (pixels) instead of deriving it from insets.
    pub fn with_plot_rect(width: i32, height: i32, plot: RectI32, limits: AxisLimits) -> Self {
        let x = LinearScale::new(limits.left, limits.right, plot.left as f32, plot.right as f32);
        let y = LinearScale::new(limits.bottom, limits.top, plot.bottom as f32, plot.top as f32);
        Self { width, height, plot, limits, x, y }
    }

    pub fn plot_rect(&self) -> RectI32 { self.plot }
    pub fn limits(&self) -> AxisLimits { self.limits }

    /// Same canvas and plot rect looking at different data limits (pan/zoom).
    pub fn with_limits(&self, limits: AxisLimits) -> Self {
        Self::with_plot_rect(self.width, self.height, self.plot, limits)
    }
}

impl ScaleTransform for RenderContext {
    fn pixel_x(&self, x: f64) -> f32 { self.x.to_px(x) }
    fn pixel_y(&self, y: f64) -> f32 { self.y.to_px(y) }
    fn px_per_unit_x(&self) -> f64 { self.x.px_per_unit() }
    fn px_per_unit_y(&self) -> f64 { self.y.px_per_unit() }
}
