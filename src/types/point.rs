//! 2D control-point type.

use std::fmt;

/// A 2D control point.
///
/// Nodes define mesh geometry and double as basis-function centers.
/// They are plain immutable values; structures that need to refer to a
/// node do so by index into a [`crate::grid::NodeGrid`].
///
/// # Example
///
/// ```
/// use fem_viz::types::Node;
///
/// let a = Node::new(0.0, 0.0);
/// let b = Node::new(3.0, 4.0);
/// assert!((a.distance(b) - 5.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Node {
    /// x-coordinate
    pub x: f64,
    /// y-coordinate
    pub y: f64,
}

impl Node {
    /// Create a node at `(x, y)`.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another node (avoids the sqrt).
    #[inline]
    pub fn distance_squared(self, other: Node) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another node.
    #[inline]
    pub fn distance(self, other: Node) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Linear interpolation: `self + t * (other - self)`.
    #[inline]
    pub fn lerp(self, other: Node, t: f64) -> Self {
        Self::new(self.x + t * (other.x - self.x), self.y + t * (other.y - self.y))
    }

    /// Return coordinates as a tuple `(x, y)`.
    #[inline]
    pub fn as_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Node {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Node> for (f64, f64) {
    #[inline]
    fn from(n: Node) -> Self {
        (n.x, n.y)
    }
}
