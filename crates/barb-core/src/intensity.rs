// File: crates/barb-core/src/intensity.rs
// Summary: One-shot magnitude normalization and per-cell color assignment.

use skia_safe as skia;
use tracing::debug;

use crate::colormap::Colormap;
use crate::sample::SampleGrid;

/// Intensity used for every cell when the field has no spread (max == min).
pub const UNIFORM_INTENSITY: f64 = 0.0;

/// Explicit magnitude range overriding the scanned min/max.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntensityRange {
    pub min: f64,
    pub max: f64,
}

/// Colors for every cell, flattened row-major (`i * cols + j`). Built once and
/// never recomputed; view changes do not touch it.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorAssignment {
    colors: Vec<skia::Color>,
}

impl ColorAssignment {
    pub fn get(&self, i: usize, j: usize, cols: usize) -> Option<skia::Color> {
        self.colors.get(i * cols + j).copied()
    }
    pub fn as_slice(&self) -> &[skia::Color] { &self.colors }
    pub fn len(&self) -> usize { self.colors.len() }
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }
    pub fn first(&self) -> Option<skia::Color> { self.colors.first().copied() }
}

pub struct MagnitudeColorMapper<'a> {
    colormap: Option<&'a dyn Colormap>,
    default_color: skia::Color,
    range: Option<IntensityRange>,
}

impl<'a> MagnitudeColorMapper<'a> {
    /// With no colormap every cell gets `default_color`.
    pub fn new(colormap: Option<&'a dyn Colormap>, default_color: skia::Color) -> Self {
        Self { colormap, default_color, range: None }
    }

    pub fn with_range(mut self, range: IntensityRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Scan the grid for (min, max) speed, seeded from cell (0, 0).
    pub fn speed_range(grid: &SampleGrid) -> Option<(f64, f64)> {
        let first = grid.samples().first()?;
        let mut min = first.speed;
        let mut max = first.speed;
        for s in grid.samples().iter().skip(1) {
            if s.speed > max {
                max = s.speed;
            } else if s.speed < min {
                min = s.speed;
            }
        }
        Some((min, max))
    }

    /// Normalized intensity per cell in row-major order.
    pub fn intensities(&self, grid: &SampleGrid) -> Vec<f64> {
        let (min, max) = match self.range {
            Some(r) => (r.min, r.max),
            None => match Self::speed_range(grid) {
                Some(mm) => mm,
                None => return Vec::new(),
            },
        };
        let span = max - min;
        if span.is_nan() || span <= 0.0 {
            debug!(min, max, cells = grid.len(), "uniform magnitude field; using fallback intensity");
            return vec![UNIFORM_INTENSITY; grid.len()];
        }
        grid.samples()
            .iter()
            .map(|s| ((s.speed - min) / span).clamp(0.0, 1.0))
            .collect()
    }

    pub fn assign(&self, grid: &SampleGrid) -> ColorAssignment {
        let colors = match self.colormap {
            Some(cmap) => self.intensities(grid).into_iter().map(|t| cmap.resolve(t)).collect(),
            None => vec![self.default_color; grid.len()],
        };
        ColorAssignment { colors }
    }
}
