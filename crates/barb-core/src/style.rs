// File: crates/barb-core/src/style.rs
// Summary: Glyph style configuration, loadable from JSON.

use serde::{Deserialize, Serialize};

use crate::anchor::ArrowAnchor;
use crate::error::FieldError;
use crate::marker::MarkerShape;

/// Default pennant width in pixels.
pub const DEFAULT_BARB_WIDTH: f64 = 10.0;
/// Default (maximum) staff length in pixels.
pub const DEFAULT_BARB_HEIGHT: f64 = 25.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphKind {
    /// Staff with pennant and flag, rotated by the sample direction.
    #[default]
    Barb,
    /// Straight vector from tail to head with a scaled arrowhead.
    Arrow,
}

/// Appearance of every glyph in a field. May change between renders; it never
/// affects the colors computed at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphStyle {
    pub anchor: ArrowAnchor,
    pub kind: GlyphKind,
    pub default_width: f64,
    pub default_height: f64,
    pub marker_shape: MarkerShape,
    /// Marker diameter in pixels; 0 disables markers.
    pub marker_size: f32,
    pub line_width: f32,
    /// Arrowhead width relative to the vector length (arrow glyphs only).
    pub arrowhead_width: f64,
    /// Arrowhead length relative to the vector length (arrow glyphs only).
    pub arrowhead_length: f64,
    pub is_visible: bool,
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self {
            anchor: ArrowAnchor::Center,
            kind: GlyphKind::Barb,
            default_width: DEFAULT_BARB_WIDTH,
            default_height: DEFAULT_BARB_HEIGHT,
            marker_shape: MarkerShape::FilledCircle,
            marker_size: 0.0,
            line_width: 1.0,
            arrowhead_width: 0.15,
            arrowhead_length: 0.5,
            is_visible: true,
        }
    }
}

impl GlyphStyle {
    /// Parse a style from JSON; omitted fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, FieldError> {
        let style: Self = serde_json::from_str(json)?;
        style.validate()?;
        Ok(style)
    }

    /// Sizes must be finite; staff, pennant and line width strictly positive.
    pub fn validate(&self) -> Result<(), FieldError> {
        let positive = [
            ("default_width", self.default_width),
            ("default_height", self.default_height),
            ("line_width", self.line_width as f64),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(FieldError::InvalidStyleValue { field, value, expected: "finite and > 0" });
            }
        }
        let non_negative = [
            ("marker_size", self.marker_size as f64),
            ("arrowhead_width", self.arrowhead_width),
            ("arrowhead_length", self.arrowhead_length),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(FieldError::InvalidStyleValue { field, value, expected: "finite and >= 0" });
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, FieldError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn draws_markers(&self) -> bool {
        self.marker_shape != MarkerShape::None && self.marker_size > 0.0
    }
}
