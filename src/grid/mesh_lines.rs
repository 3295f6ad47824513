//! Derived mesh lines over a row-major node lattice.
//!
//! A [`GridTopology`] describes how the nodes of an `n_cols` × `n_rows`
//! lattice are numbered (row-major, row 0 on top) and produces the index
//! paths for the border outline and the interior grid lines.
//! [`MeshLines`] resolves those paths against a concrete [`NodeGrid`].

use crate::error::{Error, Result};
use crate::grid::{NodeGrid, Polyline};

/// Logical shape of a row-major node lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridTopology {
    /// Number of node columns
    pub n_cols: usize,
    /// Number of node rows
    pub n_rows: usize,
}

impl GridTopology {
    /// Create a topology for an `n_cols` × `n_rows` lattice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if either dimension is less
    /// than 2.
    pub fn new(n_cols: usize, n_rows: usize) -> Result<Self> {
        if n_cols < 2 {
            return Err(Error::invalid("n_cols", "topology needs at least 2 columns"));
        }
        if n_rows < 2 {
            return Err(Error::invalid("n_rows", "topology needs at least 2 rows"));
        }
        Ok(Self { n_cols, n_rows })
    }

    /// The 4×4 topology of the seminar grids.
    pub fn seminar() -> Self {
        Self { n_cols: 4, n_rows: 4 }
    }

    /// Total number of nodes the topology expects.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.n_cols * self.n_rows
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.n_cols + col
    }

    /// Closed index path around the lattice border.
    ///
    /// Walks the top row left to right, the right column downwards, the
    /// bottom row right to left and the left column back up, repeating
    /// the start index to close the loop.
    pub fn border_path(&self) -> Vec<usize> {
        let (nc, nr) = (self.n_cols, self.n_rows);
        let mut path = Vec::with_capacity(2 * nc + 2 * nr - 3);
        for col in 0..nc {
            path.push(self.index(0, col));
        }
        for row in 1..nr {
            path.push(self.index(row, nc - 1));
        }
        for col in (0..nc - 1).rev() {
            path.push(self.index(nr - 1, col));
        }
        for row in (0..nr - 1).rev() {
            path.push(self.index(row, 0));
        }
        path
    }

    /// Index path down column `col` (top to bottom).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `col >= n_cols`.
    pub fn vertical_line(&self, col: usize) -> Result<Vec<usize>> {
        if col >= self.n_cols {
            return Err(Error::IndexOutOfRange {
                index: col,
                len: self.n_cols,
            });
        }
        Ok((0..self.n_rows).map(|row| self.index(row, col)).collect())
    }

    /// Index path along row `row` (left to right).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `row >= n_rows`.
    pub fn horizontal_line(&self, row: usize) -> Result<Vec<usize>> {
        if row >= self.n_rows {
            return Err(Error::IndexOutOfRange {
                index: row,
                len: self.n_rows,
            });
        }
        Ok((0..self.n_cols).map(|col| self.index(row, col)).collect())
    }

    /// Index paths for all interior vertical lines (columns 1..n_cols-1).
    pub fn interior_vertical_lines(&self) -> Vec<Vec<usize>> {
        (1..self.n_cols - 1)
            .map(|col| (0..self.n_rows).map(|row| self.index(row, col)).collect())
            .collect()
    }

    /// Index paths for all interior horizontal lines (rows 1..n_rows-1).
    pub fn interior_horizontal_lines(&self) -> Vec<Vec<usize>> {
        (1..self.n_rows - 1)
            .map(|row| (0..self.n_cols).map(|col| self.index(row, col)).collect())
            .collect()
    }
}

/// The mesh lines derived from a node grid.
///
/// A view over the grid: recompute with [`MeshLines::derive`] whenever a
/// new grid is built, never mutate the polylines directly.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshLines {
    /// Closed border outline
    pub border: Polyline,
    /// Interior vertical grid lines, left to right
    pub vertical: Vec<Polyline>,
    /// Interior horizontal grid lines, top to bottom
    pub horizontal: Vec<Polyline>,
}

impl MeshLines {
    /// Derive the border and interior lines of `grid` under `topology`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the grid's node count does
    /// not match the topology.
    pub fn derive(grid: &NodeGrid, topology: GridTopology) -> Result<Self> {
        if grid.len() != topology.node_count() {
            return Err(Error::invalid(
                "topology",
                format!(
                    "expects {} nodes, grid has {}",
                    topology.node_count(),
                    grid.len()
                ),
            ));
        }
        let border = grid.build_polyline(&topology.border_path())?;
        let vertical = topology
            .interior_vertical_lines()
            .iter()
            .map(|path| grid.build_polyline(path))
            .collect::<Result<Vec<_>>>()?;
        let horizontal = topology
            .interior_horizontal_lines()
            .iter()
            .map(|path| grid.build_polyline(path))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            border,
            vertical,
            horizontal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::presets;

    #[test]
    fn test_border_path_4x4() {
        let topo = GridTopology::seminar();
        assert_eq!(
            topo.border_path(),
            vec![0, 1, 2, 3, 7, 11, 15, 14, 13, 12, 8, 4, 0]
        );
    }

    #[test]
    fn test_interior_lines_4x4() {
        let topo = GridTopology::seminar();
        assert_eq!(
            topo.interior_vertical_lines(),
            vec![vec![1, 5, 9, 13], vec![2, 6, 10, 14]]
        );
        assert_eq!(
            topo.interior_horizontal_lines(),
            vec![vec![4, 5, 6, 7], vec![8, 9, 10, 11]]
        );
    }

    #[test]
    fn test_line_out_of_range() {
        let topo = GridTopology::seminar();
        assert!(topo.vertical_line(4).is_err());
        assert!(topo.horizontal_line(4).is_err());
        assert_eq!(topo.vertical_line(1).unwrap(), vec![1, 5, 9, 13]);
    }

    #[test]
    fn test_topology_too_small() {
        assert!(GridTopology::new(1, 4).is_err());
        assert!(GridTopology::new(4, 1).is_err());
    }

    #[test]
    fn test_derive_seminar_grid() {
        let grid = NodeGrid::from_points(presets::seminar_nodes().to_vec());
        let lines = MeshLines::derive(&grid, GridTopology::seminar()).unwrap();

        assert!(lines.border.is_closed());
        assert_eq!(lines.border.len(), 13);
        assert_eq!(lines.vertical.len(), 2);
        assert_eq!(lines.horizontal.len(), 2);
        // First interior horizontal line runs along the second node row.
        assert_eq!(lines.horizontal[0].ys(), vec![85.0, 60.0, 65.0, 70.0]);
    }

    #[test]
    fn test_derive_count_mismatch() {
        let grid = NodeGrid::from_points(vec![(0.0, 0.0), (1.0, 0.0)]);
        assert!(matches!(
            MeshLines::derive(&grid, GridTopology::seminar()),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_border_path_3x2() {
        // 3 columns, 2 rows:  0 1 2 / 3 4 5
        let topo = GridTopology::new(3, 2).unwrap();
        assert_eq!(topo.border_path(), vec![0, 1, 2, 5, 4, 3, 0]);
    }
}
