//! Error type for interpolant construction and evaluation.
//!
//! Failures raised by caller-supplied sampled functions are not wrapped in
//! [`InterpError`]; they are returned to the caller verbatim.

use thiserror::Error;

/// Errors produced by the interpolation core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpError {
    /// Negative polynomial degree requested at construction.
    #[error("degree must be at least 0, got {degree}")]
    InvalidDegree { degree: i64 },

    /// No node generator registered under this identifier.
    #[error("unknown grid kind {name:?}")]
    UnknownGridKind { name: String },

    /// Cardinal polynomial index outside [0, N].
    #[error("cardinal index {index} out of range for {n_nodes} nodes")]
    IndexOutOfRange { index: usize, n_nodes: usize },

    /// Nodal value vector does not match the number of nodes.
    #[error("expected {expected} nodal values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Caller-supplied grid points rejected.
    #[error("invalid grid: {reason}")]
    InvalidGrid { reason: String },
}

/// Result alias for fallible core operations.
pub type Result<T> = std::result::Result<T, InterpError>;
