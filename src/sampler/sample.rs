//! Height-field sampling of basis functions.
//!
//! Replaces per-point nested-loop evaluation with a single batch call
//! over the whole lattice. The parallel variant partitions by row; each
//! cell is written exactly once, so the output is identical to the
//! sequential result.

use crate::basis::GaussianBasis;
use crate::sampler::{HeightField, SamplingGrid};
use crate::types::Node;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// How to combine several basis functions at one sample point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Aggregator {
    /// Pointwise sum of all functions.
    #[default]
    Sum,
    /// Value of the first function only (zero for an empty set).
    FirstOnly,
    /// Value with the largest magnitude, sign preserved.
    MaxMagnitude,
}

impl Aggregator {
    fn apply(self, basis: &[GaussianBasis], p: Node) -> f64 {
        match self {
            Aggregator::Sum => basis.iter().map(|b| b.evaluate_at(p)).sum(),
            Aggregator::FirstOnly => basis.first().map_or(0.0, |b| b.evaluate_at(p)),
            Aggregator::MaxMagnitude => basis
                .iter()
                .map(|b| b.evaluate_at(p))
                .fold(0.0, |acc, v| if v.abs() > acc.abs() { v } else { acc }),
        }
    }
}

/// Evaluate `basis` over every point of `grid`.
///
/// Deterministic: identical inputs always produce an identical field.
/// An empty basis slice yields a zero field.
pub fn sample_height_field(
    grid: &SamplingGrid,
    basis: &[GaussianBasis],
    aggregator: Aggregator,
) -> HeightField {
    let shape = grid.shape();
    let (nx, ny) = shape.as_tuple();
    let mut data = Vec::with_capacity(shape.total_samples());
    for j in 0..ny {
        let y = grid.y(j);
        for i in 0..nx {
            data.push(aggregator.apply(basis, Node::new(grid.x(i), y)));
        }
    }
    HeightField::from_data(shape, data)
}

/// Parallel version of [`sample_height_field`] using rayon.
///
/// Rows are processed concurrently; the result is identical to the
/// sequential path. Enable with the `parallel` feature.
#[cfg(feature = "parallel")]
pub fn sample_height_field_parallel(
    grid: &SamplingGrid,
    basis: &[GaussianBasis],
    aggregator: Aggregator,
) -> HeightField {
    let shape = grid.shape();
    let (nx, ny) = shape.as_tuple();
    let data: Vec<f64> = (0..ny)
        .into_par_iter()
        .flat_map_iter(|j| {
            let y = grid.y(j);
            (0..nx).map(move |i| aggregator.apply(basis, Node::new(grid.x(i), y)))
        })
        .collect();
    HeightField::from_data(shape, data)
}

/// A sampled surface bundled with its coordinate axes.
///
/// The in-memory handoff to the rendering collaborator: axes for the
/// meshgrid, heights for the wireframe/surface.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfacePatch {
    /// x-axis sample coordinates
    pub x_axis: Vec<f64>,
    /// y-axis sample coordinates
    pub y_axis: Vec<f64>,
    /// Sampled heights, one row per y-axis entry
    pub heights: HeightField,
}

impl SurfacePatch {
    /// Sample `basis` over `grid` and bundle the result with its axes.
    pub fn sample(grid: &SamplingGrid, basis: &[GaussianBasis], aggregator: Aggregator) -> Self {
        Self {
            x_axis: grid.x_axis(),
            y_axis: grid.y_axis(),
            heights: sample_height_field(grid, basis, aggregator),
        }
    }
}
