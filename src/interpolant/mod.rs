//! Lagrange interpolation over a fixed grid.
//!
//! This module provides:
//! - [`LagrangeInterpolant`]: nodal polynomial, cardinal basis and the
//!   interpolation sum in product (Lagrange) form
//! - [`BarycentricWeights`]: O(N) evaluation of the same interpolant from
//!   weights precomputed once per grid

mod barycentric;
mod lagrange;

pub use barycentric::BarycentricWeights;
pub use lagrange::LagrangeInterpolant;
