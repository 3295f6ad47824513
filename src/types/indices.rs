//! Strongly-typed node index.
//!
//! Polylines and basis-function centers refer to grid nodes by position;
//! the newtype keeps those positions from being confused with other
//! integer parameters.

use std::fmt;

/// Index of a node in a [`crate::grid::NodeGrid`].
///
/// # Example
///
/// ```
/// use fem_viz::types::NodeIndex;
///
/// let idx = NodeIndex::new(5);
/// assert_eq!(idx.get(), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// First index (0).
    pub const ZERO: Self = Self(0);

    /// Create a new index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Increment by one.
    #[inline]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Create an iterator over `[0, n)` node indices.
    pub fn iter(n: usize) -> impl Iterator<Item = NodeIndex> + ExactSizeIterator {
        (0..n).map(NodeIndex)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

impl From<usize> for NodeIndex {
    #[inline]
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<NodeIndex> for usize {
    #[inline]
    fn from(idx: NodeIndex) -> usize {
        idx.0
    }
}
