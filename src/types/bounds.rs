//! 2D domain bounds.

use std::fmt;

use crate::error::{Error, Result};

/// 2D rectangular domain bounds.
///
/// Stores the spatial extent of a rectangular domain with clear
/// semantics for each boundary. Degenerate bounds are rejected at
/// construction, so every held value describes a proper rectangle.
///
/// # Example
///
/// ```
/// use fem_viz::types::Bounds2D;
///
/// let bounds = Bounds2D::new(0.0, 100.0, 0.0, 100.0).unwrap();
/// assert_eq!(bounds.width(), 100.0);
/// assert_eq!(bounds.height(), 100.0);
/// assert_eq!(bounds.center(), (50.0, 50.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2D {
    /// Minimum x-coordinate (left boundary)
    pub x_min: f64,
    /// Maximum x-coordinate (right boundary)
    pub x_max: f64,
    /// Minimum y-coordinate (bottom boundary)
    pub y_min: f64,
    /// Maximum y-coordinate (top boundary)
    pub y_max: f64,
}

impl Bounds2D {
    /// Create new domain bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `x_max <= x_min` or
    /// `y_max <= y_min`, or if any coordinate is non-finite.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self> {
        if !(x_min.is_finite() && x_max.is_finite() && y_min.is_finite() && y_max.is_finite()) {
            return Err(Error::invalid("bounds", "coordinates must be finite"));
        }
        if x_max <= x_min {
            return Err(Error::invalid(
                "bounds",
                format!("x_max ({}) must be greater than x_min ({})", x_max, x_min),
            ));
        }
        if y_max <= y_min {
            return Err(Error::invalid(
                "bounds",
                format!("y_max ({}) must be greater than y_min ({})", y_max, y_min),
            ));
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// The unit square [0, 1] × [0, 1].
    pub fn unit_square() -> Self {
        Self {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
        }
    }

    /// The [0, 100] × [0, 100] domain used by the seminar grids.
    pub fn seminar() -> Self {
        Self {
            x_min: 0.0,
            x_max: 100.0,
            y_min: 0.0,
            y_max: 100.0,
        }
    }

    /// A square domain centered at the origin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `half_width` is not positive.
    pub fn square(half_width: f64) -> Result<Self> {
        Self::new(-half_width, half_width, -half_width, half_width)
    }

    /// Domain width (x_max - x_min).
    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Domain height (y_max - y_min).
    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Domain area.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Domain center point.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Check if a point is inside the domain (inclusive).
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    /// Expand bounds by a factor (centered).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `factor` is not positive.
    pub fn expand(&self, factor: f64) -> Result<Self> {
        let (cx, cy) = self.center();
        let half_w = self.width() / 2.0 * factor;
        let half_h = self.height() / 2.0 * factor;
        Self::new(cx - half_w, cx + half_w, cy - half_h, cy + half_h)
    }

    /// Return bounds as tuple (x_min, x_max, y_min, y_max).
    #[inline]
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.x_min, self.x_max, self.y_min, self.y_max)
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.2}, {:.2}] × [{:.2}, {:.2}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

impl Default for Bounds2D {
    fn default() -> Self {
        Self::unit_square()
    }
}
