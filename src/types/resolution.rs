//! Sampling-lattice resolution.

use std::fmt;

use crate::error::{Error, Result};
use crate::types::Bounds2D;

/// Shape of a 2D sampling lattice (number of samples in each direction).
///
/// Provides a strongly-typed way to carry the dimensions of a height
/// field, preventing mix-ups between nx/ny and other integer parameters.
///
/// # Example
///
/// ```
/// use fem_viz::types::Resolution2D;
///
/// let res = Resolution2D::new(400, 400).unwrap();
/// assert_eq!(res.nx(), 400);
/// assert_eq!(res.ny(), 400);
/// assert_eq!(res.total_samples(), 160_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Resolution2D {
    /// Number of samples in x-direction
    nx: usize,
    /// Number of samples in y-direction
    ny: usize,
}

impl Resolution2D {
    /// Create a new resolution.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if either count is zero.
    pub fn new(nx: usize, ny: usize) -> Result<Self> {
        if nx == 0 {
            return Err(Error::invalid("nx", "must be positive"));
        }
        if ny == 0 {
            return Err(Error::invalid("ny", "must be positive"));
        }
        Ok(Self { nx, ny })
    }

    /// Resolution of a lattice covering `bounds` with the given step.
    ///
    /// Each axis gets `ceil(extent / step)` samples, matching a half-open
    /// `[min, max)` range walked in increments of `step`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `step` is not positive and
    /// finite.
    pub fn from_extent(bounds: &Bounds2D, step: f64) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(Error::invalid(
                "step",
                format!("must be positive and finite, got {}", step),
            ));
        }
        let nx = (bounds.width() / step).ceil() as usize;
        let ny = (bounds.height() / step).ceil() as usize;
        Self::new(nx.max(1), ny.max(1))
    }

    /// Number of samples in x-direction.
    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of samples in y-direction.
    #[inline]
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Total number of samples.
    #[inline]
    pub fn total_samples(&self) -> usize {
        self.nx * self.ny
    }

    /// Return as tuple (nx, ny).
    #[inline]
    pub fn as_tuple(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }
}

impl fmt::Display for Resolution2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.nx, self.ny)
    }
}

impl From<Resolution2D> for (usize, usize) {
    fn from(res: Resolution2D) -> Self {
        (res.nx, res.ny)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_creation() {
        let r = Resolution2D::new(100, 50).unwrap();
        assert_eq!(r.nx(), 100);
        assert_eq!(r.ny(), 50);
        assert_eq!(r.total_samples(), 5000);
    }

    #[test]
    fn test_zero_counts_rejected() {
        assert!(Resolution2D::new(0, 10).is_err());
        assert!(Resolution2D::new(10, 0).is_err());
    }

    #[test]
    fn test_from_extent_exact() {
        // 100 / 0.25 = 400 samples per axis.
        let b = Bounds2D::seminar();
        let r = Resolution2D::from_extent(&b, 0.25).unwrap();
        assert_eq!(r.as_tuple(), (400, 400));
    }

    #[test]
    fn test_from_extent_rounds_up() {
        let b = Bounds2D::new(0.0, 10.0, 0.0, 10.0).unwrap();
        let r = Resolution2D::from_extent(&b, 3.0).unwrap();
        assert_eq!(r.as_tuple(), (4, 4)); // ceil(10/3)
    }

    #[test]
    fn test_from_extent_bad_step() {
        let b = Bounds2D::unit_square();
        assert!(Resolution2D::from_extent(&b, 0.0).is_err());
        assert!(Resolution2D::from_extent(&b, -1.0).is_err());
        assert!(Resolution2D::from_extent(&b, f64::NAN).is_err());
    }

    #[test]
    fn test_display() {
        let r = Resolution2D::new(20, 10).unwrap();
        assert_eq!(format!("{}", r), "20×10");
    }
}
