//! Bilinear quad shape functions on the reference square [-1, 1]².
//!
//! Corner convention (counter-clockwise):
//! - 0: bottom-left  (r=-1, s=-1)
//! - 1: bottom-right (r=+1, s=-1)
//! - 2: top-right    (r=+1, s=+1)
//! - 3: top-left     (r=-1, s=+1)

use crate::types::Node;

/// Evaluate the four bilinear shape functions at reference coordinates
/// `(r, s)`.
///
/// The functions form a partition of unity and each equals 1 at its own
/// corner and 0 at the other three.
#[inline]
pub fn shape_functions(r: f64, s: f64) -> [f64; 4] {
    [
        0.25 * (1.0 - r) * (1.0 - s),
        0.25 * (1.0 + r) * (1.0 - s),
        0.25 * (1.0 + r) * (1.0 + s),
        0.25 * (1.0 - r) * (1.0 + s),
    ]
}

/// Map reference coordinates `(r, s)` to physical coordinates inside the
/// quad spanned by `corners`.
///
/// Used when subdividing lattice elements: interior nodes of a distorted
/// element are placed by mapping their reference positions through the
/// element's corner nodes.
pub fn map_to_physical(r: f64, s: f64, corners: &[Node; 4]) -> Node {
    let shapes = shape_functions(r, s);
    let mut x = 0.0;
    let mut y = 0.0;
    for (weight, corner) in shapes.iter().zip(corners.iter()) {
        x += weight * corner.x;
        y += weight * corner.y;
    }
    Node::new(x, y)
}
