//! Lebesgue function and constant of a grid.
//!
//! The Lebesgue function λ(x) = Σ_i |ℓ_i(x)| bounds how much the
//! interpolation operator amplifies perturbations of the nodal values; its
//! supremum over [-1, 1] is the Lebesgue constant Λ_N. Λ_N is estimated as
//! the maximum of λ over a dense set of stations, so it is a lower bound on
//! the true supremum whose accuracy depends on the station count.

use tracing::debug;

use super::config::DiagnosticsConfig;
use crate::interpolant::LagrangeInterpolant;

impl LagrangeInterpolant {
    /// Lebesgue function λ(x) = Σ_i |ℓ_i(x)|.
    pub fn lebesgue_function(&self, x: f64) -> f64 {
        (0..self.n_nodes())
            .map(|i| self.cardinal_unchecked(i, x).abs())
            .sum()
    }

    /// Estimate Λ_N with the default 10000 stations.
    pub fn estimate_lebesgue_constant(&self) -> f64 {
        self.estimate_lebesgue_constant_with(&DiagnosticsConfig::default())
    }

    /// Estimate Λ_N as the maximum of λ over the configured stations.
    pub fn estimate_lebesgue_constant_with(&self, config: &DiagnosticsConfig) -> f64 {
        let mut lambda = 0.0;
        for x in config.stations() {
            let sum = self.lebesgue_function(x);
            if sum > lambda {
                lambda = sum;
            }
        }
        debug!(
            degree = self.degree(),
            n_stations = config.n_stations(),
            lebesgue = lambda,
            "estimated Lebesgue constant"
        );
        lambda
    }

    /// Parallel [`estimate_lebesgue_constant_with`](Self::estimate_lebesgue_constant_with).
    ///
    /// Stations are split across the rayon pool; the result is identical to
    /// the sequential estimate.
    #[cfg(feature = "parallel")]
    pub fn estimate_lebesgue_constant_parallel(&self, config: &DiagnosticsConfig) -> f64 {
        use rayon::prelude::*;

        let lambda = (0..config.n_stations())
            .into_par_iter()
            .map(|j| self.lebesgue_function(config.station(j)))
            .reduce(|| 0.0, f64::max);
        debug!(
            degree = self.degree(),
            n_stations = config.n_stations(),
            lebesgue = lambda,
            "estimated Lebesgue constant (parallel)"
        );
        lambda
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{CHEBYSHEV_GAUSS_LOBATTO, GAUSS_LOBATTO_LEGENDRE, UNIFORM};

    #[test]
    fn test_lebesgue_function_is_one_at_nodes() {
        let interp = LagrangeInterpolant::new(5, UNIFORM).unwrap();
        for &xi in interp.nodes() {
            assert!((interp.lebesgue_function(xi) - 1.0).abs() < 1e-14);
        }
    }

    #[test]
    fn test_low_degree_values() {
        // Degree 0 and 1: the cardinal functions are non-negative on [-1, 1]
        for degree in 0..=1 {
            let interp = LagrangeInterpolant::new(degree, UNIFORM).unwrap();
            assert!((interp.estimate_lebesgue_constant() - 1.0).abs() < 1e-12);
        }

        // Degree 2 uniform: Λ = 1.25, attained at x = ±1/2
        let interp = LagrangeInterpolant::new(2, UNIFORM).unwrap();
        let lambda = interp.estimate_lebesgue_constant();
        assert!((lambda - 1.25).abs() < 1e-6, "got {lambda}");
    }

    #[test]
    fn test_at_least_one() {
        for kind in [UNIFORM, CHEBYSHEV_GAUSS_LOBATTO, GAUSS_LOBATTO_LEGENDRE] {
            for degree in 0..=10 {
                let interp = LagrangeInterpolant::new(degree, kind).unwrap();
                assert!(interp.estimate_lebesgue_constant() >= 1.0 - 1e-14);
            }
        }
    }

    #[test]
    fn test_uniform_grows_faster_than_chebyshev() {
        let degree = 12;
        let uniform = LagrangeInterpolant::new(degree, UNIFORM)
            .unwrap()
            .estimate_lebesgue_constant();
        let cheb = LagrangeInterpolant::new(degree, CHEBYSHEV_GAUSS_LOBATTO)
            .unwrap()
            .estimate_lebesgue_constant();
        assert!(uniform > 10.0 * cheb, "uniform {uniform}, chebyshev {cheb}");
        // Chebyshev-Lobatto: Λ_N ≤ (2/π) ln(N) + 1
        assert!(cheb <= 2.0 / std::f64::consts::PI * (degree as f64).ln() + 1.0);
    }

    #[test]
    fn test_coarse_sampling_is_lower_bound() {
        let interp = LagrangeInterpolant::new(8, UNIFORM).unwrap();
        let coarse = interp
            .estimate_lebesgue_constant_with(&DiagnosticsConfig::default().with_n_stations(17));
        let dense = interp.estimate_lebesgue_constant();
        assert!(coarse <= dense);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let config = DiagnosticsConfig::default();
        let interp = LagrangeInterpolant::new(9, UNIFORM).unwrap();
        assert_eq!(
            interp.estimate_lebesgue_constant_parallel(&config),
            interp.estimate_lebesgue_constant_with(&config)
        );
    }
}
