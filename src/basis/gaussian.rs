//! Gaussian node functions.
//!
//! A node function is a radially symmetric Gaussian bump centered on a
//! grid node, standing in for a FEM interpolation/shape function in the
//! seminar figures. Two forms exist:
//!
//! - unnormalized: `exp(-r² / (2σ²))`, peak value 1 at the center
//! - normalized:   `1/(2πσ²) · exp(-r² / (2σ²))`, integrates to 1

use std::f64::consts::PI;

use crate::error::{Error, Result};
use crate::types::Node;

/// A radially symmetric Gaussian bump.
///
/// Stateless beyond its parameters; evaluation is a pure function of
/// `(x, y)`. The normalization choice is explicit because both forms are
/// in use: the density form for probability-style illustrations, the
/// peak-1 form for shape-function illustrations.
///
/// # Example
///
/// ```
/// use fem_viz::basis::GaussianBasis;
/// use fem_viz::types::Node;
///
/// let bump = GaussianBasis::bump(Node::new(50.0, 50.0), 10.0).unwrap();
/// assert!((bump.evaluate(50.0, 50.0) - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussianBasis {
    center: Node,
    std: f64,
    normalized: bool,
}

impl GaussianBasis {
    /// Create a Gaussian basis function.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `std` is not positive and
    /// finite.
    pub fn new(center: Node, std: f64, normalized: bool) -> Result<Self> {
        if !std.is_finite() || std <= 0.0 {
            return Err(Error::invalid(
                "std",
                format!("must be positive and finite, got {}", std),
            ));
        }
        Ok(Self {
            center,
            std,
            normalized,
        })
    }

    /// Unnormalized bump: peak value 1 at the center.
    pub fn bump(center: Node, std: f64) -> Result<Self> {
        Self::new(center, std, false)
    }

    /// Normalized 2D Gaussian density: integrates to 1 over the plane.
    pub fn density(center: Node, std: f64) -> Result<Self> {
        Self::new(center, std, true)
    }

    /// The center node.
    #[inline]
    pub fn center(&self) -> Node {
        self.center
    }

    /// The standard deviation.
    #[inline]
    pub fn std(&self) -> f64 {
        self.std
    }

    /// Whether this is the normalized (density) form.
    #[inline]
    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    /// Value at the center, the maximum of the function.
    #[inline]
    pub fn peak(&self) -> f64 {
        if self.normalized {
            1.0 / (2.0 * PI * self.std * self.std)
        } else {
            1.0
        }
    }

    /// Evaluate the function at `(x, y)`.
    #[inline]
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        let r2 = self.center.distance_squared(Node::new(x, y));
        self.peak() * (-r2 / (2.0 * self.std * self.std)).exp()
    }

    /// Evaluate the function at a node.
    #[inline]
    pub fn evaluate_at(&self, p: Node) -> f64 {
        self.evaluate(p.x, p.y)
    }
}

/// Pointwise sum of several basis functions at `(x, y)`.
///
/// Used to layer several bumps over overlapping domains; an empty slice
/// sums to zero.
pub fn evaluate_sum(basis: &[GaussianBasis], x: f64, y: f64) -> f64 {
    basis.iter().map(|b| b.evaluate(x, y)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_bump_peak() {
        let g = GaussianBasis::bump(Node::new(50.0, 50.0), 10.0).unwrap();
        assert!((g.evaluate(50.0, 50.0) - 1.0).abs() < TOL);
        assert!((g.peak() - 1.0).abs() < TOL);
    }

    #[test]
    fn test_density_peak() {
        let std = 10.0;
        let g = GaussianBasis::density(Node::new(50.0, 50.0), std).unwrap();
        let expected = 1.0 / (2.0 * PI * std * std);
        assert!((g.evaluate(50.0, 50.0) - expected).abs() < TOL);
    }

    #[test]
    fn test_decays_from_center() {
        let g = GaussianBasis::bump(Node::new(0.0, 0.0), 5.0).unwrap();
        let near = g.evaluate(1.0, 0.0);
        let far = g.evaluate(10.0, 0.0);
        assert!(near < 1.0);
        assert!(far < near);
    }

    #[test]
    fn test_radial_symmetry() {
        let g = GaussianBasis::bump(Node::new(50.0, 75.0), 6.0).unwrap();
        for &(dx, dy) in &[(1.0, 0.0), (0.0, 3.5), (2.0, -7.0), (-4.5, 4.5)] {
            let plus = g.evaluate(50.0 + dx, 75.0 + dy);
            let minus = g.evaluate(50.0 - dx, 75.0 - dy);
            assert!((plus - minus).abs() < TOL, "asymmetric at ({}, {})", dx, dy);
        }
    }

    #[test]
    fn test_known_value() {
        // One standard deviation from the center along x: exp(-1/2).
        let g = GaussianBasis::bump(Node::new(0.0, 0.0), 4.0).unwrap();
        assert!((g.evaluate(4.0, 0.0) - (-0.5f64).exp()).abs() < TOL);
    }

    #[test]
    fn test_invalid_std() {
        let c = Node::new(50.0, 50.0);
        assert!(matches!(
            GaussianBasis::new(c, 0.0, false),
            Err(Error::InvalidParameter { name: "std", .. })
        ));
        assert!(GaussianBasis::new(c, -1.0, true).is_err());
        assert!(GaussianBasis::new(c, f64::NAN, false).is_err());
    }

    #[test]
    fn test_evaluate_sum_matches_individuals() {
        let a = GaussianBasis::bump(Node::new(50.0, 50.0), 10.0).unwrap();
        let b = GaussianBasis::density(Node::new(50.0, 75.0), 6.0).unwrap();
        let fns = [a, b];
        for &(x, y) in &[(0.0, 0.0), (50.0, 50.0), (50.0, 75.0), (60.0, 60.0)] {
            let sum = evaluate_sum(&fns, x, y);
            let expected = a.evaluate(x, y) + b.evaluate(x, y);
            assert!((sum - expected).abs() < TOL);
        }
    }

    #[test]
    fn test_evaluate_sum_empty() {
        assert_eq!(evaluate_sum(&[], 10.0, 10.0), 0.0);
    }

    #[test]
    fn test_density_integrates_to_one() {
        // Numerical integral over ±8σ with a fine grid.
        let std = 2.0;
        let g = GaussianBasis::density(Node::new(0.0, 0.0), std).unwrap();
        let half = 8.0 * std;
        let n = 400;
        let h = 2.0 * half / n as f64;
        let mut integral = 0.0;
        for i in 0..n {
            let x = -half + (i as f64 + 0.5) * h;
            for j in 0..n {
                let y = -half + (j as f64 + 0.5) * h;
                integral += g.evaluate(x, y) * h * h;
            }
        }
        assert!((integral - 1.0).abs() < 1e-6, "integral = {}", integral);
    }
}
