//! Barycentric evaluation of the Lagrange interpolant.
//!
//! With weights w_i = 1 / Π_{j≠i} (X[i] - X[j]) precomputed once, the
//! interpolant is evaluated in O(N) by the second barycentric formula
//!
//! ```text
//!            Σ_i w_i f_i / (x - X[i])
//! I{f}(x) = ---------------------------
//!              Σ_i w_i / (x - X[i])
//! ```
//!
//! When x coincides with a node the formula is replaced by the nodal value.
//! Results agree with [`LagrangeInterpolant`] up to rounding.

use crate::error::{InterpError, Result};
use crate::grid::Grid;

use super::LagrangeInterpolant;

/// Precomputed barycentric weights for a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct BarycentricWeights {
    nodes: Vec<f64>,
    weights: Vec<f64>,
}

impl BarycentricWeights {
    /// Compute the weights for `grid`. O(N²), done once.
    pub fn new(grid: &Grid) -> Self {
        let nodes = grid.points().to_vec();
        let weights = nodes
            .iter()
            .enumerate()
            .map(|(i, &xi)| {
                let denom: f64 = nodes
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, &xj)| xi - xj)
                    .product();
                1.0 / denom
            })
            .collect();
        Self { nodes, weights }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    fn node_index(&self, x: f64) -> Option<usize> {
        self.nodes.iter().position(|&xi| xi == x)
    }

    /// i-th cardinal polynomial ℓ_i(x) in barycentric form.
    pub fn cardinal(&self, i: usize, x: f64) -> Result<f64> {
        if i >= self.nodes.len() {
            return Err(InterpError::IndexOutOfRange {
                index: i,
                n_nodes: self.nodes.len(),
            });
        }
        if let Some(k) = self.node_index(x) {
            return Ok(if k == i { 1.0 } else { 0.0 });
        }

        let denom: f64 = self
            .nodes
            .iter()
            .zip(&self.weights)
            .map(|(&xj, &wj)| wj / (x - xj))
            .sum();
        Ok(self.weights[i] / (x - self.nodes[i]) / denom)
    }

    /// Evaluate the interpolant from nodal values.
    pub fn evaluate(&self, x: f64, values: &[f64]) -> Result<f64> {
        if values.len() != self.nodes.len() {
            return Err(InterpError::LengthMismatch {
                expected: self.nodes.len(),
                actual: values.len(),
            });
        }
        Ok(self.combine(x, values))
    }

    /// Interpolated value I{f}(x).
    ///
    /// Samples `f` at every node before evaluating, propagating the first
    /// failure like [`LagrangeInterpolant::interpolate`].
    pub fn interpolate<F, E>(&self, x: f64, mut f: F) -> std::result::Result<f64, E>
    where
        F: FnMut(f64) -> std::result::Result<f64, E>,
    {
        let values = self
            .nodes
            .iter()
            .map(|&xi| f(xi))
            .collect::<std::result::Result<Vec<_>, E>>()?;
        Ok(self.combine(x, &values))
    }

    /// Second barycentric formula; `values` has one entry per node.
    fn combine(&self, x: f64, values: &[f64]) -> f64 {
        if let Some(k) = self.node_index(x) {
            return values[k];
        }

        let mut num = 0.0;
        let mut den = 0.0;
        for ((&xj, &wj), &fj) in self.nodes.iter().zip(&self.weights).zip(values) {
            let t = wj / (x - xj);
            num += t * fj;
            den += t;
        }
        num / den
    }
}

impl LagrangeInterpolant {
    /// Barycentric weights for this interpolant's grid.
    pub fn barycentric(&self) -> BarycentricWeights {
        BarycentricWeights::new(self.grid())
    }
}
