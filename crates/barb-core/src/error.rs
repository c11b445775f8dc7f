// File: crates/barb-core/src/error.rs
// Summary: Error type shared by grid construction, extent calculation and style configuration.

use thiserror::Error;

/// Errors raised by the field model. All of them indicate a caller mistake;
/// nothing here is transient, so none of them should be retried.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("coordinate axis `{axis}` is empty")]
    EmptyAxis { axis: &'static str },

    #[error(
        "sample grid is {rows}x{cols} but coordinate axes are {expected_rows}x{expected_cols}"
    )]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid sample at ({i}, {j}): speed={speed}, direction={direction}")]
    InvalidSample {
        i: usize,
        j: usize,
        speed: f64,
        direction: f64,
    },

    #[error("unsupported anchor mode `{0}` (expected base, center or tip)")]
    UnsupportedAnchor(String),

    #[error("invalid glyph style: {0}")]
    InvalidStyle(#[from] serde_json::Error),

    #[error("glyph style `{field}` must be {expected}, got {value}")]
    InvalidStyleValue {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("coordinate axis `{axis}` has non-finite value {value} at index {index}")]
    NonFiniteCoordinate {
        axis: &'static str,
        index: usize,
        value: f64,
    },
}
