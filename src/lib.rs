//! # lagrange-rs
//!
//! Lagrange-form polynomial interpolation on [-1, 1].
//!
//! This crate provides:
//! - Interpolation grids (uniform, Chebyshev-Gauss-Lobatto,
//!   Gauss-Lobatto-Legendre) selected by name from an extensible registry
//! - The Lagrange interpolant: nodal polynomial, cardinal basis and
//!   interpolation of sampled functions
//! - Barycentric evaluation of the same interpolant
//! - Diagnostics: Lebesgue constant and maximum interpolation error by
//!   dense sampling
//! - Interpolation matrices for evaluating many nodal vectors at once
//!
//! # Example
//!
//! ```
//! use lagrange_rs::LagrangeInterpolant;
//!
//! let interp = LagrangeInterpolant::new(2, "uniform").unwrap();
//! assert_eq!(interp.nodes(), &[-1.0, 0.0, 1.0]);
//! assert_eq!(interp.cardinal(1, 0.0).unwrap(), 1.0);
//! assert_eq!(interp.nodal_polynomial(0.5), -0.375);
//!
//! let value = interp
//!     .interpolate(0.5, |x| Ok::<_, std::convert::Infallible>(x * x))
//!     .unwrap();
//! assert!((value - 0.25).abs() < 1e-15);
//! ```

pub mod analysis;
pub mod error;
pub mod grid;
pub mod interpolant;
pub mod operators;

pub use analysis::{DiagnosticsConfig, MaxErrorEstimate};
pub use error::{InterpError, Result};
pub use grid::{
    CHEBYSHEV_GAUSS_LOBATTO, ChebyshevGaussLobatto, GAUSS_LOBATTO_LEGENDRE, GaussLobattoLegendre,
    Grid, GridRegistry, NodeGenerator, UNIFORM, Uniform,
};
pub use interpolant::{BarycentricWeights, LagrangeInterpolant};
pub use operators::{apply_interpolation, interpolation_matrix};
