//! Interpolation grids on [-1, 1].
//!
//! This module provides:
//! - The [`Grid`] value type (N+1 distinct nodes)
//! - The [`NodeGenerator`] contract and the built-in strategies
//!   (uniform, Chebyshev-Gauss-Lobatto, Gauss-Lobatto-Legendre)
//! - [`GridRegistry`], which selects a strategy by name and is open to
//!   caller-registered strategies

mod generators;
mod points;
mod registry;

pub use generators::{ChebyshevGaussLobatto, GaussLobattoLegendre, NodeGenerator, Uniform};
pub use points::Grid;
pub use registry::{CHEBYSHEV_GAUSS_LOBATTO, GAUSS_LOBATTO_LEGENDRE, GridRegistry, UNIFORM};
