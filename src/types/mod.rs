//! Strongly-typed domain types for safer APIs.
//!
//! # Example
//!
//! ```
//! use fem_viz::types::{Bounds2D, Node, NodeIndex, Resolution2D};
//!
//! let bounds = Bounds2D::seminar();
//! let shape = Resolution2D::from_extent(&bounds, 0.25).unwrap();
//! assert_eq!(shape.as_tuple(), (400, 400));
//!
//! let center = Node::new(50.0, 50.0);
//! assert!(bounds.contains(center.x, center.y));
//! let first = NodeIndex::ZERO;
//! assert_eq!(first.get(), 0);
//! ```

mod bounds;
mod indices;
mod point;
mod resolution;

pub use bounds::Bounds2D;
pub use indices::NodeIndex;
pub use point::Node;
pub use resolution::Resolution2D;
