// File: crates/barb-core/src/extent.rs
// Summary: Axis limits model and the padded plot extent derived from coordinate axes.

use crate::error::FieldError;

/// Padding added on each side of the data extent, in data units. Keeps the
/// outermost glyphs inside a tight-fitting view.
pub const EXTENT_PADDING: f64 = 1.0;

/// Rectangular visible area in data coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLimits {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl AxisLimits {
    pub const fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self { left, right, bottom, top }
    }

    pub fn expanded(&self, pad: f64) -> Self {
        Self::new(self.left - pad, self.right + pad, self.bottom - pad, self.top + pad)
    }
}

impl Default for AxisLimits {
    fn default() -> Self {
        Self::new(-10.0, 10.0, -10.0, 10.0)
    }
}

fn finite_min_max(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// `(min(xs) - 1, max(xs) + 1, min(ys) - 1, max(ys) + 1)`.
pub fn extent(xs: &[f64], ys: &[f64]) -> Result<AxisLimits, FieldError> {
    let (x_min, x_max) = finite_min_max(xs).ok_or(FieldError::EmptyAxis { axis: "x" })?;
    let (y_min, y_max) = finite_min_max(ys).ok_or(FieldError::EmptyAxis { axis: "y" })?;
    Ok(AxisLimits::new(x_min, x_max, y_min, y_max).expanded(EXTENT_PADDING))
}
