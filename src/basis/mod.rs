//! Basis functions for node-function visualization.
//!
//! This module provides the Gaussian node functions drawn over grid
//! nodes and the bilinear quad shape functions used to place interior
//! nodes inside distorted elements.

pub mod bilinear;
mod gaussian;

pub use gaussian::{evaluate_sum, GaussianBasis};
