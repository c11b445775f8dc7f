// File: crates/barb-core/src/scale.rs
// Summary: Data-to-pixel scale transforms consumed by the glyph renderer.

/// Forward coordinate transform for the current view. Supplied fresh each
/// frame by the host; the renderer never stores it.
pub trait ScaleTransform {
    fn pixel_x(&self, x: f64) -> f32;
    fn pixel_y(&self, y: f64) -> f32;
    /// Screen pixels per one data unit horizontally.
    fn px_per_unit_x(&self) -> f64;
    /// Screen pixels per one data unit vertically.
    fn px_per_unit_y(&self) -> f64;

    fn pixel(&self, x: f64, y: f64) -> skia_safe::Point {
        skia_safe::Point::new(self.pixel_x(x), self.pixel_y(y))
    }
}

/// Linear map of the data range `[min, max]` onto pixels `[start_px, end_px]`.
/// For a y axis pass `start_px = bottom` and `end_px = top` so values grow upward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub min: f64,
    pub max: f64,
    pub start_px: f32,
    pub end_px: f32,
}

impl LinearScale {
    pub fn new(min: f64, max: f64, start_px: f32, end_px: f32) -> Self {
        let mut s = Self { min, max, start_px, end_px };
        if (s.max - s.min).abs() < 1e-12 { s.max = s.min + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let frac = (v - self.min) / (self.max - self.min);
        self.start_px + (frac * (self.end_px - self.start_px) as f64) as f32
    }

    /// Absolute pixel length of one data unit.
    pub fn px_per_unit(&self) -> f64 {
        ((self.end_px - self.start_px) as f64 / (self.max - self.min)).abs()
    }
}
