//! Node grids and derived mesh geometry.
//!
//! A [`NodeGrid`] holds the ordered control points of a mesh;
//! [`MeshLines`] derives the border outline and interior grid lines from
//! it by index selection. The [`presets`] module carries the 4×4 seminar
//! layouts.

mod mesh_lines;
mod node_grid;
mod polyline;
pub mod presets;

pub use mesh_lines::{GridTopology, MeshLines};
pub use node_grid::NodeGrid;
pub use polyline::Polyline;
