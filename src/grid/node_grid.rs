//! Ordered collections of 2D control nodes.

use crate::error::{Error, Result};
use crate::grid::Polyline;
use crate::types::{Bounds2D, Node, NodeIndex};

/// An ordered, immutable collection of 2D control nodes.
///
/// Node order is meaningful: polylines and basis-function centers refer
/// to nodes by index. The grid is never edited in place; derived
/// structures are rebuilt from a new grid instead.
///
/// # Example
///
/// ```
/// use fem_viz::grid::NodeGrid;
///
/// let grid = NodeGrid::from_points(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
/// let border = grid.build_polyline(&[0, 1, 2, 0]).unwrap();
/// assert!(border.is_closed());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct NodeGrid {
    nodes: Vec<Node>,
}

impl NodeGrid {
    /// Create a grid from an explicit ordered list of `(x, y)` pairs.
    pub fn from_points(points: Vec<(f64, f64)>) -> Self {
        Self {
            nodes: points.into_iter().map(Node::from).collect(),
        }
    }

    /// Create a grid from an ordered list of nodes.
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Create a regular `n_cols` × `n_rows` lattice spanning `bounds`.
    ///
    /// Nodes are stored row-major with row 0 on the top edge (`y_max`),
    /// matching the numbering of the seminar grids. Corner nodes sit
    /// exactly on the bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if either dimension is less
    /// than 2 (a lattice needs at least its corner nodes).
    pub fn regular_lattice(bounds: &Bounds2D, n_cols: usize, n_rows: usize) -> Result<Self> {
        if n_cols < 2 {
            return Err(Error::invalid("n_cols", "lattice needs at least 2 columns"));
        }
        if n_rows < 2 {
            return Err(Error::invalid("n_rows", "lattice needs at least 2 rows"));
        }
        let dx = bounds.width() / (n_cols - 1) as f64;
        let dy = bounds.height() / (n_rows - 1) as f64;
        let mut nodes = Vec::with_capacity(n_cols * n_rows);
        for row in 0..n_rows {
            let y = bounds.y_max - row as f64 * dy;
            for col in 0..n_cols {
                nodes.push(Node::new(bounds.x_min + col as f64 * dx, y));
            }
        }
        Ok(Self { nodes })
    }

    /// Create a regular lattice with interior nodes displaced.
    ///
    /// Border nodes stay fixed on the bounds; each interior node gets an
    /// independent offset drawn from `offset` for x and y. The caller
    /// supplies the offset source, so the grid stays deterministic for a
    /// deterministic source.
    ///
    /// # Errors
    ///
    /// Same conditions as [`NodeGrid::regular_lattice`].
    pub fn jittered_lattice<F>(
        bounds: &Bounds2D,
        n_cols: usize,
        n_rows: usize,
        mut offset: F,
    ) -> Result<Self>
    where
        F: FnMut() -> f64,
    {
        let mut grid = Self::regular_lattice(bounds, n_cols, n_rows)?;
        for row in 1..n_rows - 1 {
            for col in 1..n_cols - 1 {
                let node = &mut grid.nodes[row * n_cols + col];
                node.x += offset();
                node.y += offset();
            }
        }
        Ok(grid)
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the grid has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes, in order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Iterate over the nodes in order.
    pub fn iter(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes.iter().copied()
    }

    /// The node at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not in `[0, len)`.
    pub fn node_at(&self, index: NodeIndex) -> Result<Node> {
        self.nodes
            .get(index.get())
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index: index.get(),
                len: self.nodes.len(),
            })
    }

    /// Build a polyline by selecting nodes in the given index order.
    ///
    /// An empty index list yields an empty polyline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] on the first index outside
    /// `[0, len)`; no partial polyline is produced.
    pub fn build_polyline(&self, indices: &[usize]) -> Result<Polyline> {
        let mut points = Vec::with_capacity(indices.len());
        for &index in indices {
            points.push(self.node_at(NodeIndex::new(index))?);
        }
        Ok(Polyline::new(points))
    }

    /// x-coordinates of all nodes, in order (for point-marker rendering).
    pub fn xs(&self) -> Vec<f64> {
        self.nodes.iter().map(|n| n.x).collect()
    }

    /// y-coordinates of all nodes, in order.
    pub fn ys(&self) -> Vec<f64> {
        self.nodes.iter().map(|n| n.y).collect()
    }
}
