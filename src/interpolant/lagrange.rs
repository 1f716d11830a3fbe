//! Lagrange-form interpolant over a fixed grid.
//!
//! The interpolant of degree N over grid X is
//!
//! ```text
//! I{f}(x) = Σ_{i=0..N} f(X[i]) ℓ_i(x),    ℓ_i(x) = Π_{j≠i} (x - X[j]) / (X[i] - X[j])
//! ```
//!
//! and the nodal polynomial is W(x) = Π_{i=0..N} (x - X[i]).

use tracing::debug;

use crate::error::{InterpError, Result};
use crate::grid::{Grid, GridRegistry};

/// Degree-N Lagrange interpolant over N+1 nodes in [-1, 1].
///
/// Read-only after construction. Sampled functions are supplied per call and
/// re-evaluated at every node on each call.
#[derive(Debug, Clone, PartialEq)]
pub struct LagrangeInterpolant {
    degree: usize,
    grid: Grid,
}

impl LagrangeInterpolant {
    /// Build a degree-N interpolant on a built-in grid kind.
    ///
    /// Fails with [`InterpError::InvalidDegree`] for N < 0 before any grid is
    /// requested, then with [`InterpError::UnknownGridKind`] if `grid_kind`
    /// is not registered.
    pub fn new(degree: i64, grid_kind: &str) -> Result<Self> {
        Self::with_registry(degree, grid_kind, GridRegistry::builtin())
    }

    /// Same as [`new`](Self::new), resolving `grid_kind` in `registry`.
    pub fn with_registry(degree: i64, grid_kind: &str, registry: &GridRegistry) -> Result<Self> {
        let n = usize::try_from(degree).map_err(|_| InterpError::InvalidDegree { degree })?;
        let grid = registry.generate(grid_kind, n)?;
        debug!(degree = n, grid_kind, "built Lagrange interpolant");
        Ok(Self { degree: n, grid })
    }

    /// Build an interpolant over an already validated grid.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            degree: grid.degree(),
            grid,
        }
    }

    /// Polynomial degree N.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of nodes, N+1.
    pub fn n_nodes(&self) -> usize {
        self.grid.len()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Grid points X[0..=N].
    pub fn nodes(&self) -> &[f64] {
        self.grid.points()
    }

    /// Nodal polynomial W(x) = Π_i (x - X[i]).
    pub fn nodal_polynomial(&self, x: f64) -> f64 {
        self.nodes().iter().map(|&xi| x - xi).product()
    }

    /// i-th cardinal polynomial ℓ_i(x).
    ///
    /// Equals 1 at X[i] and 0 at every other node. Fails with
    /// [`InterpError::IndexOutOfRange`] unless 0 ≤ i ≤ N.
    pub fn cardinal(&self, i: usize, x: f64) -> Result<f64> {
        if i >= self.n_nodes() {
            return Err(InterpError::IndexOutOfRange {
                index: i,
                n_nodes: self.n_nodes(),
            });
        }
        Ok(self.cardinal_unchecked(i, x))
    }

    /// ℓ_i(x) without the bounds check.
    ///
    /// Nodes are assumed pairwise distinct; a grid with coincident points
    /// yields a non-finite result here.
    pub(crate) fn cardinal_unchecked(&self, i: usize, x: f64) -> f64 {
        let nodes = self.nodes();
        let xi = nodes[i];
        let mut l = 1.0;
        for (j, &xj) in nodes.iter().enumerate() {
            if j != i {
                l *= (x - xj) / (xi - xj);
            }
        }
        l
    }

    /// All cardinal polynomials at `x`, ℓ_0(x)..ℓ_N(x).
    pub fn cardinals(&self, x: f64) -> Vec<f64> {
        (0..self.n_nodes())
            .map(|i| self.cardinal_unchecked(i, x))
            .collect()
    }

    /// Interpolated value I{f}(x) = Σ_i f(X[i]) ℓ_i(x).
    ///
    /// `f` is evaluated at every node on each call. The first failure of `f`
    /// is returned unchanged and the remaining nodes are not visited.
    pub fn interpolate<F, E>(&self, x: f64, mut f: F) -> std::result::Result<f64, E>
    where
        F: FnMut(f64) -> std::result::Result<f64, E>,
    {
        let mut sum = 0.0;
        for (i, &xi) in self.nodes().iter().enumerate() {
            sum += f(xi)? * self.cardinal_unchecked(i, x);
        }
        Ok(sum)
    }

    /// Values of `f` at the nodes, stopping at the first failure.
    pub fn nodal_values<F, E>(&self, mut f: F) -> std::result::Result<Vec<f64>, E>
    where
        F: FnMut(f64) -> std::result::Result<f64, E>,
    {
        self.nodes().iter().map(|&xi| f(xi)).collect()
    }

    /// Evaluate the interpolant from precomputed nodal values.
    ///
    /// `values` must hold N+1 entries, one per node.
    pub fn evaluate(&self, x: f64, values: &[f64]) -> Result<f64> {
        if values.len() != self.n_nodes() {
            return Err(InterpError::LengthMismatch {
                expected: self.n_nodes(),
                actual: values.len(),
            });
        }
        Ok(values
            .iter()
            .enumerate()
            .map(|(i, &v)| v * self.cardinal_unchecked(i, x))
            .sum())
    }
}
