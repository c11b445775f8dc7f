// File: crates/barb-core/src/sample.rs
// Summary: Wind sample model and the immutable rectangular sample grid.
// Notes:
// - `direction` is in degrees, clockwise from screen-up (0 = north, 90 = east).
//   That is the same sense as a canvas rotation in a y-down pixel frame.
// - The grid is indexed [x-index, y-index] and flattened row-major (i * cols + j).

use crate::error::FieldError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub speed: f64,     // magnitude in domain units, >= 0
    pub direction: f64, // degrees, clockwise from up
}

impl Sample {
    pub const fn new(speed: f64, direction: f64) -> Self {
        Self { speed, direction }
    }

    /// Build a sample from a direction given in radians (same clockwise-from-up sense).
    pub fn from_radians(speed: f64, radians: f64) -> Self {
        Self { speed, direction: radians.to_degrees() }
    }

    pub fn direction_radians(&self) -> f64 {
        self.direction.to_radians()
    }

    fn is_valid(&self) -> bool {
        self.speed.is_finite() && self.speed >= 0.0 && self.direction.is_finite()
    }
}

/// Rectangular grid of samples. Dimensions are fixed at construction; there
/// is no mutation API, replacing the data means building a new grid.
#[derive(Clone, Debug)]
pub struct SampleGrid {
    xs: Vec<f64>,
    ys: Vec<f64>,
    samples: Vec<Sample>,
}

impl SampleGrid {
    /// Construct from per-x rows: `rows[i][j]` is the sample at `(xs[i], ys[j])`.
    pub fn try_new(xs: Vec<f64>, ys: Vec<f64>, rows: Vec<Vec<Sample>>) -> Result<Self, FieldError> {
        if rows.len() != xs.len() {
            return Err(FieldError::DimensionMismatch {
                expected_rows: xs.len(),
                expected_cols: ys.len(),
                rows: rows.len(),
                cols: rows.first().map_or(ys.len(), Vec::len),
            });
        }
        if let Some(bad) = rows.iter().find(|r| r.len() != ys.len()) {
            return Err(FieldError::DimensionMismatch {
                expected_rows: xs.len(),
                expected_cols: ys.len(),
                rows: rows.len(),
                cols: bad.len(),
            });
        }
        let samples: Vec<Sample> = rows.into_iter().flatten().collect();
        Self::from_flat(xs, ys, samples)
    }

    /// Construct from an already flattened row-major sample vector.
    pub fn from_flat(xs: Vec<f64>, ys: Vec<f64>, samples: Vec<Sample>) -> Result<Self, FieldError> {
        let cols = ys.len();
        if samples.len() != xs.len() * cols {
            return Err(FieldError::DimensionMismatch {
                expected_rows: xs.len(),
                expected_cols: cols,
                rows: if cols == 0 { samples.len() } else { samples.len() / cols },
                cols,
            });
        }
        for (k, s) in samples.iter().enumerate() {
            if !s.is_valid() {
                return Err(FieldError::InvalidSample {
                    i: k / cols,
                    j: k % cols,
                    speed: s.speed,
                    direction: s.direction,
                });
            }
        }
        Ok(Self { xs, ys, samples })
    }

    /// Build a grid by evaluating `f(i, j, x, y)` for every cell.
    pub fn from_fn<F>(xs: Vec<f64>, ys: Vec<f64>, mut f: F) -> Result<Self, FieldError>
    where
        F: FnMut(usize, usize, f64, f64) -> Sample,
    {
        let mut samples = Vec::with_capacity(xs.len() * ys.len());
        for (i, &x) in xs.iter().enumerate() {
            for (j, &y) in ys.iter().enumerate() {
                samples.push(f(i, j, x, y));
            }
        }
        Self::from_flat(xs, ys, samples)
    }

    pub fn xs(&self) -> &[f64] { &self.xs }
    pub fn ys(&self) -> &[f64] { &self.ys }

    /// Number of x positions (first index).
    pub fn rows(&self) -> usize { self.xs.len() }
    /// Number of y positions (second index).
    pub fn cols(&self) -> usize { self.ys.len() }

    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    pub fn get(&self, i: usize, j: usize) -> Option<&Sample> {
        if i >= self.rows() || j >= self.cols() { return None; }
        self.samples.get(i * self.cols() + j)
    }

    /// Flat row-major view of all samples.
    pub fn samples(&self) -> &[Sample] { &self.samples }

    /// Iterate `(i, j, x, y, sample)` in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, f64, f64, &Sample)> + '_ {
        let cols = self.cols();
        self.samples.iter().enumerate().map(move |(k, s)| {
            let (i, j) = (k / cols, k % cols);
            (i, j, self.xs[i], self.ys[j], s)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_must_match_xs() {
        let err = SampleGrid::try_new(vec![0.0, 1.0], vec![0.0], vec![vec![Sample::new(1.0, 0.0)]])
            .unwrap_err();
        assert!(matches!(err, FieldError::DimensionMismatch { expected_rows: 2, rows: 1, .. }));
    }

    #[test]
    fn ragged_row_is_rejected() {
        let rows = vec![
            vec![Sample::new(1.0, 0.0), Sample::new(2.0, 0.0)],
            vec![Sample::new(1.0, 0.0)],
        ];
        let err = SampleGrid::try_new(vec![0.0, 1.0], vec![0.0, 1.0], rows).unwrap_err();
        assert!(matches!(err, FieldError::DimensionMismatch { cols: 1, .. }));
    }

    #[test]
    fn negative_speed_is_rejected() {
        let err = SampleGrid::from_flat(vec![0.0], vec![0.0, 1.0], vec![Sample::new(1.0, 0.0), Sample::new(-2.0, 0.0)])
            .unwrap_err();
        assert!(matches!(err, FieldError::InvalidSample { i: 0, j: 1, .. }));
    }

    #[test]
    fn iteration_is_row_major() {
        let grid = SampleGrid::from_fn(vec![10.0, 20.0], vec![1.0, 2.0, 3.0], |i, j, _, _| {
            Sample::new((i * 3 + j) as f64, 0.0)
        })
        .unwrap();
        let order: Vec<(usize, usize)> = grid.iter_cells().map(|(i, j, ..)| (i, j)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        for (i, j, x, y, s) in grid.iter_cells() {
            assert_eq!(s.speed, (i * 3 + j) as f64);
            assert_eq!(x, grid.xs()[i]);
            assert_eq!(y, grid.ys()[j]);
        }
        assert_eq!(grid.get(1, 2).map(|s| s.speed), Some(5.0));
        assert!(grid.get(2, 0).is_none());
    }

    #[test]
    fn radians_round_to_degrees() {
        let s = Sample::from_radians(3.0, std::f64::consts::FRAC_PI_2);
        assert!((s.direction - 90.0).abs() < 1e-12);
        assert!((s.direction_radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn empty_grid_is_allowed() {
        let grid = SampleGrid::from_flat(Vec::new(), Vec::new(), Vec::new()).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.iter_cells().count(), 0);
    }
}
