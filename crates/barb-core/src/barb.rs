// File: crates/barb-core/src/barb.rs
// Summary: Wind-barb glyph geometry (staff, pennant, flag) and its auto-scaling from the view density.
// Notes:
// - Geometry lives in a local frame: origin at the anchor pixel, y down, staff along
//   the y axis with the head (pennant end) at -half_height. The frame is rotated by
//   the sample direction (degrees clockwise from up) when drawn.
// - Magnitude is carried by color only. The pennant always covers 2 of the 12 ticks
//   of the half staff and a single flag tick sits at tick 3.

use skia_safe as skia;

use crate::geometry;
use crate::style::{GlyphStyle, DEFAULT_BARB_HEIGHT, DEFAULT_BARB_WIDTH};
use crate::surface::{DrawSurface, SavedTransform};

/// Fraction of one data unit (in pixels) used for the staff length.
pub const STAFF_SCALE: f64 = 0.7;
/// Number of ticks the half staff is divided into.
pub const HALF_STAFF_TICKS: f64 = 12.0;
/// Minimum pennant width relative to the half staff.
pub const MIN_WIDTH_RATIO: f64 = 0.7;
const PENNANT_TICKS: f64 = 2.0;
const FLAG_TICK: f64 = 3.0;

/// Pixel dimensions of one barb for the current view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarbMetrics {
    /// Full staff length: `min(default_height, 0.7 * px_per_unit_y)`.
    pub height: f64,
    /// Half staff, the distance from the anchor to either staff end.
    pub half_height: f64,
    /// One tick: `half_height / 12`.
    pub unit: f64,
    /// Pennant width: `max(default_width, 0.7 * half_height)`.
    pub width: f64,
    /// Flag tick length, half the pennant width.
    pub flag_width: f64,
}

impl BarbMetrics {
    /// Non-positive or non-finite defaults fall back to `DEFAULT_BARB_*`.
    pub fn new(px_per_unit_y: f64, default_width: f64, default_height: f64) -> Self {
        let default_width = positive_or(default_width, DEFAULT_BARB_WIDTH);
        let default_height = positive_or(default_height, DEFAULT_BARB_HEIGHT);
        let scaled = STAFF_SCALE * px_per_unit_y;
        // A non-finite density (degenerate view) falls back to the default size.
        let height = if scaled.is_finite() { default_height.min(scaled.max(0.0)) } else { default_height };
        let half_height = height / 2.0;
        let unit = half_height / HALF_STAFF_TICKS;
        let width = default_width.max(MIN_WIDTH_RATIO * half_height);
        Self { height, half_height, unit, width, flag_width: width / 2.0 }
    }

    pub fn from_style(px_per_unit_y: f64, style: &GlyphStyle) -> Self {
        Self::new(px_per_unit_y, style.default_width, style.default_height)
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { fallback }
}

/// Barb geometry in the local (unrotated, anchor-centered) frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarbGlyph {
    pub staff: [skia::Point; 2],
    pub pennant: [skia::Point; 3],
    pub flag: [skia::Point; 2],
}

impl BarbGlyph {
    pub fn build(m: &BarbMetrics) -> Self {
        let h = m.half_height as f32;
        let u = m.unit as f32;
        let w = m.width as f32;
        let pennant_base = -(h - u * PENNANT_TICKS as f32);
        let flag_y = -(h - u * FLAG_TICK as f32);
        Self {
            staff: [skia::Point::new(0.0, -h), skia::Point::new(0.0, h)],
            pennant: [skia::Point::new(0.0, -h), skia::Point::new(w, -h), skia::Point::new(0.0, pennant_base)],
            flag: [skia::Point::new(0.0, flag_y), skia::Point::new(m.flag_width as f32, flag_y)],
        }
    }

    /// Same geometry mapped to pixels for an anchor and rotation.
    pub fn to_pixels(&self, anchor: skia::Point, degrees: f32) -> Self {
        let map = |p: skia::Point| geometry::to_pixel(anchor, degrees, p);
        Self {
            staff: self.staff.map(map),
            pennant: self.pennant.map(map),
            flag: self.flag.map(map),
        }
    }

    /// Pixel-space bounding box of the glyph once placed.
    pub fn bounds(&self, anchor: skia::Point, degrees: f32) -> skia::Rect {
        let placed = self.to_pixels(anchor, degrees);
        let (mut l, mut t, mut r, mut b) = (anchor.x, anchor.y, anchor.x, anchor.y);
        for p in placed.staff.iter().chain(&placed.pennant).chain(&placed.flag) {
            l = l.min(p.x);
            t = t.min(p.y);
            r = r.max(p.x);
            b = b.max(p.y);
        }
        skia::Rect::from_ltrb(l, t, r, b)
    }
}

/// Build the barb for a view density.
pub fn build_barb(px_per_unit_y: f64, style: &GlyphStyle) -> BarbGlyph {
    BarbGlyph::build(&BarbMetrics::from_style(px_per_unit_y, style))
}

/// Draw one barb: save, translate to `anchor`, rotate by `direction` degrees,
/// stroke the staff, fill the pennant, stroke the flag, restore.
pub fn draw_barb<S: DrawSurface + ?Sized>(
    surface: &mut S,
    anchor: skia::Point,
    direction: f64,
    glyph: &BarbGlyph,
    color: skia::Color,
    line_width: f32,
) {
    let mut frame = SavedTransform::new(surface);
    frame.translate(anchor.x, anchor.y);
    frame.rotate(direction as f32);
    frame.draw_polyline(&glyph.staff, color, line_width);
    frame.fill_polygon(&glyph.pennant, color);
    frame.draw_polyline(&glyph.flag, color, line_width);
}
