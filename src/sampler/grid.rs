//! Rectangular sampling lattices.

use crate::error::{Error, Result};
use crate::types::{Bounds2D, Node, Resolution2D};

/// An axis-aligned lattice of evaluation points.
///
/// Covers `bounds` in increments of `step` per axis, half-open on the
/// upper end: sample `i` along x sits at `x_min + i·step` for
/// `i in 0..nx` with `nx = ceil(width / step)`. Built once per sampling
/// request and immutable afterwards.
///
/// # Example
///
/// ```
/// use fem_viz::sampler::SamplingGrid;
/// use fem_viz::types::Bounds2D;
///
/// let grid = SamplingGrid::new(Bounds2D::seminar(), 0.25).unwrap();
/// assert_eq!(grid.shape().as_tuple(), (400, 400));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplingGrid {
    bounds: Bounds2D,
    step: f64,
    shape: Resolution2D,
}

impl SamplingGrid {
    /// Create a sampling grid over `bounds` with the given step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `step` is not positive and
    /// finite. Degenerate bounds are already unrepresentable in
    /// [`Bounds2D`].
    pub fn new(bounds: Bounds2D, step: f64) -> Result<Self> {
        let shape = Resolution2D::from_extent(&bounds, step)?;
        Ok(Self {
            bounds,
            step,
            shape,
        })
    }

    /// The covered bounds.
    #[inline]
    pub fn bounds(&self) -> Bounds2D {
        self.bounds
    }

    /// The step size.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The lattice shape (nx × ny).
    #[inline]
    pub fn shape(&self) -> Resolution2D {
        self.shape
    }

    /// x-coordinate of sample column `i`.
    #[inline]
    pub fn x(&self, i: usize) -> f64 {
        self.bounds.x_min + i as f64 * self.step
    }

    /// y-coordinate of sample row `j`.
    #[inline]
    pub fn y(&self, j: usize) -> f64 {
        self.bounds.y_min + j as f64 * self.step
    }

    /// The evaluation point at column `i`, row `j`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if either index is outside the
    /// lattice shape.
    pub fn point(&self, i: usize, j: usize) -> Result<Node> {
        if i >= self.shape.nx() {
            return Err(Error::IndexOutOfRange {
                index: i,
                len: self.shape.nx(),
            });
        }
        if j >= self.shape.ny() {
            return Err(Error::IndexOutOfRange {
                index: j,
                len: self.shape.ny(),
            });
        }
        Ok(Node::new(self.x(i), self.y(j)))
    }

    /// All x-axis sample coordinates, in order.
    pub fn x_axis(&self) -> Vec<f64> {
        (0..self.shape.nx()).map(|i| self.x(i)).collect()
    }

    /// All y-axis sample coordinates, in order.
    pub fn y_axis(&self) -> Vec<f64> {
        (0..self.shape.ny()).map(|j| self.y(j)).collect()
    }
}
