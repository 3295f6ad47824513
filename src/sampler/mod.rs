//! Surface sampling of basis functions over rectangular lattices.

mod grid;
mod height_field;
mod sample;

pub use grid::SamplingGrid;
pub use height_field::HeightField;
pub use sample::{sample_height_field, Aggregator, SurfacePatch};

#[cfg(feature = "parallel")]
pub use sample::sample_height_field_parallel;
