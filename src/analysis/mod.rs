//! Dense-sampling diagnostics for an interpolant.
//!
//! Both estimators sample [-1, 1] at equally spaced stations (10000 by
//! default, see [`DiagnosticsConfig`]):
//! - Lebesgue constant: max over stations of Σ_i |ℓ_i(x)|
//! - Max error: max over stations of |f(x) - I{f}(x)|, with its location
//!
//! With the `parallel` feature both have rayon-backed variants that return
//! the same values as the sequential ones.
//!
//! # Example
//!
//! ```
//! use lagrange_rs::LagrangeInterpolant;
//! use std::convert::Infallible;
//!
//! let interp = LagrangeInterpolant::new(8, "uniform").unwrap();
//! let lambda = interp.estimate_lebesgue_constant();
//! assert!(lambda >= 1.0);
//!
//! let estimate = interp
//!     .estimate_max_error(|x| Ok::<_, Infallible>(x.sin()))
//!     .unwrap();
//! assert!(estimate.max_error < 1e-6);
//! ```

mod config;
mod lebesgue;
mod max_error;

pub use config::{DEFAULT_STATIONS, DiagnosticsConfig};
pub use max_error::MaxErrorEstimate;
