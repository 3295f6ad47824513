//! Sampled surface heights.

use crate::types::Resolution2D;

/// A 2D array of surface heights, one value per sample point.
///
/// Storage is a flat row-major array: `data[j * nx + i]` holds the value
/// at column `i` (along x) and row `j` (along y). Owned by the caller
/// that requested the sampling.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightField {
    /// Height values, row-major with y as the outer index
    data: Vec<f64>,
    shape: Resolution2D,
}

impl HeightField {
    /// Create a zero-filled field of the given shape.
    pub fn zeros(shape: Resolution2D) -> Self {
        Self {
            data: vec![0.0; shape.total_samples()],
            shape,
        }
    }

    /// Create a field from existing row-major data.
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal `shape.total_samples()`;
    /// that mismatch is a programming error, not caller input.
    pub fn from_data(shape: Resolution2D, data: Vec<f64>) -> Self {
        assert_eq!(
            data.len(),
            shape.total_samples(),
            "data length {} does not match shape {}",
            data.len(),
            shape
        );
        Self { data, shape }
    }

    /// The field shape (nx × ny).
    #[inline]
    pub fn shape(&self) -> Resolution2D {
        self.shape
    }

    /// Value at column `i`, row `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[j * self.shape.nx() + i]
    }

    /// Set the value at column `i`, row `j`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[j * self.shape.nx() + i] = value;
    }

    /// All values of row `j`, in column order.
    pub fn row(&self, j: usize) -> &[f64] {
        let nx = self.shape.nx();
        &self.data[j * nx..(j + 1) * nx]
    }

    /// Minimum value in the field.
    pub fn min(&self) -> f64 {
        self.data.iter().cloned().fold(f64::INFINITY, f64::min)
    }

    /// Maximum value in the field.
    pub fn max(&self) -> f64 {
        self.data.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Sum of all values (used for numerical integration checks).
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// The flat row-major data.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}
