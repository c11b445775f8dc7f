// File: crates/barb-core/src/marker.rs
// Summary: Point marker shapes drawn at a sample's anchor pixel.

use serde::{Deserialize, Serialize};
use skia_safe as skia;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerShape {
    None,
    #[default]
    FilledCircle,
    OpenCircle,
    FilledSquare,
    OpenSquare,
    Cross,
}

impl MarkerShape {
    pub fn is_filled(&self) -> bool {
        matches!(self, MarkerShape::FilledCircle | MarkerShape::FilledSquare)
    }
}

/// Draw `shape` of diameter `size` centered at `center`.
pub(crate) fn draw_skia(canvas: &skia::Canvas, center: skia::Point, shape: MarkerShape, size: f32, color: skia::Color) {
    if shape == MarkerShape::None || size <= 0.0 {
        return;
    }
    let half = size * 0.5;
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(color);
    paint.set_stroke_width(1.0);
    paint.set_style(if shape.is_filled() { skia::paint::Style::Fill } else { skia::paint::Style::Stroke });

    match shape {
        MarkerShape::FilledCircle | MarkerShape::OpenCircle => {
            canvas.draw_circle(center, half, &paint);
        }
        MarkerShape::FilledSquare | MarkerShape::OpenSquare => {
            let rect = skia::Rect::from_ltrb(center.x - half, center.y - half, center.x + half, center.y + half);
            canvas.draw_rect(rect, &paint);
        }
        MarkerShape::Cross => {
            canvas.draw_line((center.x - half, center.y), (center.x + half, center.y), &paint);
            canvas.draw_line((center.x, center.y - half), (center.x, center.y + half), &paint);
        }
        MarkerShape::None => {}
    }
}
