//! The 4×4 control-node layouts used in the seminar figures.
//!
//! Both layouts cover the [0, 100]² domain with all border nodes pinned
//! to the edges and irregular interior positions. Node order is
//! row-major from the top-left corner.

/// Seminar grid with strongly displaced interior nodes.
#[rustfmt::skip]
pub const SEMINAR_NODES: [(f64, f64); 16] = [
    (  0.0, 100.0), ( 45.0, 100.0), ( 75.0, 100.0), (100.0, 100.0),
    (  0.0,  85.0), ( 45.0,  60.0), ( 65.0,  65.0), (100.0,  70.0),
    (  0.0,  35.0), ( 35.0,  35.0), ( 70.0,  30.0), (100.0,  40.0),
    (  0.0,   0.0), ( 40.0,   0.0), ( 80.0,   0.0), (100.0,   0.0),
];

/// Seminar grid variant with milder interior displacement.
#[rustfmt::skip]
pub const SEMINAR_NODES_SMOOTH: [(f64, f64); 16] = [
    (  0.0, 100.0), ( 45.0, 100.0), ( 75.0, 100.0), (100.0, 100.0),
    (  0.0,  85.0), ( 30.0,  80.0), ( 80.0,  75.0), (100.0,  70.0),
    (  0.0,  35.0), ( 35.0,  40.0), ( 75.0,  35.0), (100.0,  40.0),
    (  0.0,   0.0), ( 40.0,   0.0), ( 80.0,   0.0), (100.0,   0.0),
];

/// The strongly displaced 16-node seminar grid.
pub fn seminar_nodes() -> [(f64, f64); 16] {
    SEMINAR_NODES
}

/// The mildly displaced 16-node seminar grid.
pub fn seminar_nodes_smooth() -> [(f64, f64); 16] {
    SEMINAR_NODES_SMOOTH
}

/// Indices of the four central nodes (basis-function centers in the
/// seminar surface figure).
pub const CENTRAL_NODE_INDICES: [usize; 4] = [5, 6, 9, 10];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{GridTopology, NodeGrid};
    use crate::types::Bounds2D;

    #[test]
    fn test_preset_sizes() {
        assert_eq!(seminar_nodes().len(), GridTopology::seminar().node_count());
        assert_eq!(seminar_nodes_smooth().len(), 16);
    }

    #[test]
    fn test_presets_within_domain() {
        let bounds = Bounds2D::seminar();
        for &(x, y) in SEMINAR_NODES.iter().chain(SEMINAR_NODES_SMOOTH.iter()) {
            assert!(bounds.contains(x, y), "({}, {}) outside domain", x, y);
        }
    }

    #[test]
    fn test_border_nodes_on_edges() {
        let grid = NodeGrid::from_points(seminar_nodes().to_vec());
        let topo = GridTopology::seminar();
        let border = grid.build_polyline(&topo.border_path()).unwrap();
        for p in border.points() {
            let on_edge = p.x == 0.0 || p.x == 100.0 || p.y == 0.0 || p.y == 100.0;
            assert!(on_edge, "border node {} not on an edge", p);
        }
    }

    #[test]
    fn test_central_nodes_interior() {
        let grid = NodeGrid::from_points(seminar_nodes().to_vec());
        for &i in &CENTRAL_NODE_INDICES {
            let n = grid.nodes()[i];
            assert!(n.x > 0.0 && n.x < 100.0);
            assert!(n.y > 0.0 && n.y < 100.0);
        }
    }
}
