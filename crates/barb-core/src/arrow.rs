// File: crates/barb-core/src/arrow.rs
// Summary: Plain vector glyph: the tail-to-head segment with an arrowhead scaled to its length.

use skia_safe as skia;

use crate::anchor::GlyphSegment;
use crate::surface::DrawSurface;

/// Polyline `tail, head, corner1, head, corner2` for a scaled arrowhead.
/// `head_width` and `head_length` are fractions of the segment length.
pub fn arrow_polyline(seg: &GlyphSegment, head_width: f64, head_length: f64) -> [skia::Point; 5] {
    let dx = (seg.head.x - seg.tail.x) as f64;
    let dy = (seg.head.y - seg.tail.y) as f64;
    let angle = dy.atan2(dx);
    let head_angle = head_width.atan2(head_length);
    let tip_len = (head_length * head_length + head_width * head_width).sqrt();
    let len = (dx * dx + dy * dy).sqrt() * tip_len;

    let (hx, hy) = (seg.head.x as f64, seg.head.y as f64);
    let c1 = skia::Point::new(
        (hx - len * (head_angle - angle).cos()) as f32,
        (hy + len * (head_angle - angle).sin()) as f32,
    );
    let c2 = skia::Point::new(
        (hx - len * (head_angle + angle).cos()) as f32,
        (hy - len * (head_angle + angle).sin()) as f32,
    );
    [seg.tail, seg.head, c1, seg.head, c2]
}

pub fn draw_arrow<S: DrawSurface + ?Sized>(
    surface: &mut S,
    seg: &GlyphSegment,
    head_width: f64,
    head_length: f64,
    color: skia::Color,
    line_width: f32,
) {
    surface.draw_polyline(&arrow_polyline(seg, head_width, head_length), color, line_width);
}
