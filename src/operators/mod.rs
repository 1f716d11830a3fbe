//! Dense operators built from the cardinal basis.

mod interpolation;

pub use interpolation::{apply_interpolation, interpolation_matrix};
