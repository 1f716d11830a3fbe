//! Interpolation matrix from grid nodes to target points.
//!
//! The interpolation matrix E maps nodal values to values at arbitrary
//! points: u(y_k) = Σ_i E[k,i] * u_i, with E[k,i] = ℓ_i(y_k).

use faer::Mat;

use crate::error::{InterpError, Result};
use crate::interpolant::LagrangeInterpolant;

/// Build E[k,i] = ℓ_i(targets[k]), one row per target point.
pub fn interpolation_matrix(interp: &LagrangeInterpolant, targets: &[f64]) -> Mat<f64> {
    let n = interp.n_nodes();
    let mut e = Mat::zeros(targets.len(), n);

    for (k, &y) in targets.iter().enumerate() {
        for i in 0..n {
            e[(k, i)] = interp.cardinal_unchecked(i, y);
        }
    }

    e
}

/// Apply an interpolation matrix to one vector of nodal values.
pub fn apply_interpolation(e: &Mat<f64>, nodal: &[f64]) -> Result<Vec<f64>> {
    if nodal.len() != e.ncols() {
        return Err(InterpError::LengthMismatch {
            expected: e.ncols(),
            actual: nodal.len(),
        });
    }

    let mut out = vec![0.0; e.nrows()];
    for (k, out_k) in out.iter_mut().enumerate() {
        for (i, &u) in nodal.iter().enumerate() {
            *out_k += e[(k, i)] * u;
        }
    }
    Ok(out)
}
