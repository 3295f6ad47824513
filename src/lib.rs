//! # fem-viz
//!
//! Core geometry and basis-function sampling for FEM visualization.
//!
//! This crate provides the data behind the seminar figures of Gaussian
//! node functions over an irregular control-node mesh:
//! - Node grids with derived polylines (border, interior grid lines)
//! - Gaussian basis functions (normalized and peak-1 forms)
//! - Height-field sampling over rectangular lattices
//! - Bilinear quad shape functions for element subdivision
//!
//! Rendering is left to the caller: the crate hands over coordinate
//! sequences, axes, and height fields in memory and nothing else.
//!
//! ```
//! use fem_viz::basis::GaussianBasis;
//! use fem_viz::grid::{presets, GridTopology, MeshLines, NodeGrid};
//! use fem_viz::sampler::{Aggregator, SamplingGrid, SurfacePatch};
//! use fem_viz::types::Bounds2D;
//!
//! // Mesh geometry for the 2D figure.
//! let grid = NodeGrid::from_points(presets::seminar_nodes().to_vec());
//! let lines = MeshLines::derive(&grid, GridTopology::seminar()).unwrap();
//! assert!(lines.border.is_closed());
//!
//! // Node functions over the four central nodes for the 3D figure.
//! let stds = [20.0, 12.0, 16.0, 24.0];
//! let basis: Vec<_> = presets::CENTRAL_NODE_INDICES
//!     .iter()
//!     .zip(stds)
//!     .map(|(&i, std)| GaussianBasis::bump(grid.nodes()[i], std).unwrap())
//!     .collect();
//!
//! let sampling = SamplingGrid::new(Bounds2D::seminar(), 0.25).unwrap();
//! let patch = SurfacePatch::sample(&sampling, &basis, Aggregator::Sum);
//! assert_eq!(patch.heights.shape().as_tuple(), (400, 400));
//! ```

pub mod basis;
pub mod error;
pub mod grid;
pub mod sampler;
pub mod types;

pub use basis::{evaluate_sum, GaussianBasis};
pub use error::{Error, Result};
pub use grid::{GridTopology, MeshLines, NodeGrid, Polyline};
pub use sampler::{sample_height_field, Aggregator, HeightField, SamplingGrid, SurfacePatch};
pub use types::{Bounds2D, Node, NodeIndex, Resolution2D};

#[cfg(feature = "parallel")]
pub use sampler::sample_height_field_parallel;
