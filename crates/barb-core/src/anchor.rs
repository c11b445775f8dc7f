// File: crates/barb-core/src/anchor.rs
// Summary: Anchor modes and the data-space to pixel-space tail/head transform for a glyph.
// Notes:
// - The offset vector is the raw (speed, direction) pair reinterpreted as (dx, dy)
//   in data units. It is not a u/v wind decomposition; the barb's rotation is what
//   encodes the true direction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use skia_safe as skia;

use crate::error::FieldError;
use crate::scale::ScaleTransform;

/// Which part of a directional glyph is pinned to the sample coordinate.
/// Parsed from `base`, `center` or `tip` (case-insensitive); nothing else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ArrowAnchor {
    Base,
    #[default]
    Center,
    Tip,
}

impl ArrowAnchor {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ArrowAnchor::Base => "base",
            ArrowAnchor::Center => "center",
            ArrowAnchor::Tip => "tip",
        }
    }
}

impl FromStr for ArrowAnchor {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" => Ok(ArrowAnchor::Base),
            "center" => Ok(ArrowAnchor::Center),
            "tip" => Ok(ArrowAnchor::Tip),
            _ => Err(FieldError::UnsupportedAnchor(s.to_string())),
        }
    }
}

impl TryFrom<String> for ArrowAnchor {
    type Error = FieldError;
    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

impl From<ArrowAnchor> for String {
    fn from(a: ArrowAnchor) -> Self { a.as_str().to_string() }
}

impl fmt::Display for ArrowAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tail and head of a glyph in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphSegment {
    pub tail: skia::Point,
    pub head: skia::Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphTransform {
    pub anchor: ArrowAnchor,
}

impl GlyphTransform {
    pub const fn new(anchor: ArrowAnchor) -> Self {
        Self { anchor }
    }

    /// Data-space endpoints `(tail, head)` before projection.
    pub fn data_endpoints(&self, (x, y): (f64, f64), (dx, dy): (f64, f64)) -> ((f64, f64), (f64, f64)) {
        match self.anchor {
            ArrowAnchor::Base => ((x, y), (x + dx, y + dy)),
            ArrowAnchor::Center => ((x - dx / 2.0, y - dy / 2.0), (x + dx / 2.0, y + dy / 2.0)),
            ArrowAnchor::Tip => ((x - dx, y - dy), (x, y)),
        }
    }

    pub fn segment<C: ScaleTransform + ?Sized>(&self, ctx: &C, point: (f64, f64), vector: (f64, f64)) -> GlyphSegment {
        let ((tx, ty), (hx, hy)) = self.data_endpoints(point, vector);
        GlyphSegment { tail: ctx.pixel(tx, ty), head: ctx.pixel(hx, hy) }
    }
}
