// File: crates/barb-core/src/legend.rs
// Summary: Single representative legend entry for a glyph field.

use skia_safe as skia;

use crate::marker::MarkerShape;

/// Line width the legend swatch is drawn with.
pub const LEGEND_LINE_WIDTH: f32 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    pub label: Option<String>,
    pub color: skia::Color,
    pub line_width: f32,
    pub marker_shape: MarkerShape,
}

impl LegendItem {
    pub fn new(label: Option<String>, color: skia::Color) -> Self {
        Self { label, color, line_width: LEGEND_LINE_WIDTH, marker_shape: MarkerShape::None }
    }
}
