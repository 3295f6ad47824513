//! Polylines derived from node grids.

use crate::types::Node;

/// An ordered sequence of nodes defining a piecewise-linear curve.
///
/// Polylines are derivations of a [`crate::grid::NodeGrid`], built by
/// selecting node indices (mesh border, interior grid lines). They own
/// copies of the selected nodes, so a polyline stays valid on its own
/// once handed to a renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Node>,
}

impl Polyline {
    /// Create a polyline from an ordered list of points.
    pub fn new(points: Vec<Node>) -> Self {
        Self { points }
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the polyline has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True if the first and last points coincide (a closed loop).
    ///
    /// Polylines with fewer than two points are not considered closed.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 => first == last,
            _ => false,
        }
    }

    /// The points in order.
    #[inline]
    pub fn points(&self) -> &[Node] {
        &self.points
    }

    /// x-coordinates of all points, in order.
    ///
    /// Together with [`Polyline::ys`] this is the coordinate-split form
    /// most 2D line renderers consume.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// y-coordinates of all points, in order.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Total length along the polyline.
    pub fn arc_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|seg| seg[0].distance(seg[1]))
            .sum()
    }
}

impl FromIterator<Node> for Polyline {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn square_loop() -> Polyline {
        Polyline::new(vec![
            Node::new(0.0, 0.0),
            Node::new(1.0, 0.0),
            Node::new(1.0, 1.0),
            Node::new(0.0, 1.0),
            Node::new(0.0, 0.0),
        ])
    }

    #[test]
    fn test_empty() {
        let p = Polyline::default();
        assert!(p.is_empty());
        assert!(!p.is_closed());
        assert_eq!(p.xs(), Vec::<f64>::new());
    }

    #[test]
    fn test_coordinate_split() {
        let p = Polyline::new(vec![Node::new(0.0, 100.0), Node::new(45.0, 100.0)]);
        assert_eq!(p.xs(), vec![0.0, 45.0]);
        assert_eq!(p.ys(), vec![100.0, 100.0]);
    }

    #[test]
    fn test_closed_loop() {
        assert!(square_loop().is_closed());
        let open = Polyline::new(vec![Node::new(0.0, 0.0), Node::new(1.0, 0.0)]);
        assert!(!open.is_closed());
    }

    #[test]
    fn test_single_point_not_closed() {
        let p = Polyline::new(vec![Node::new(1.0, 1.0)]);
        assert!(!p.is_closed());
    }

    #[test]
    fn test_arc_length() {
        assert!((square_loop().arc_length() - 4.0).abs() < TOL);
    }
}
