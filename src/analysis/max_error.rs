//! Maximum pointwise interpolation error against a reference function.

use tracing::debug;

use super::config::DiagnosticsConfig;
use crate::interpolant::LagrangeInterpolant;

/// Largest sampled |f(x) - I{f}(x)| and where it occurred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxErrorEstimate {
    /// Maximum absolute error over the stations
    pub max_error: f64,
    /// First station attaining `max_error`; -1 when every error is zero
    pub location: f64,
}

impl MaxErrorEstimate {
    fn new() -> Self {
        Self {
            max_error: 0.0,
            location: -1.0,
        }
    }
}

impl LagrangeInterpolant {
    /// Estimate the maximum interpolation error of `f` with 10000 stations.
    pub fn estimate_max_error<F, E>(&self, f: F) -> Result<MaxErrorEstimate, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        self.estimate_max_error_with(&DiagnosticsConfig::default(), f)
    }

    /// Estimate the maximum interpolation error of `f` over the configured
    /// stations.
    ///
    /// At each station both f(x) and I{f}(x) are evaluated. Any failure of
    /// `f` aborts the whole estimate and is returned as is.
    pub fn estimate_max_error_with<F, E>(
        &self,
        config: &DiagnosticsConfig,
        mut f: F,
    ) -> Result<MaxErrorEstimate, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        let mut estimate = MaxErrorEstimate::new();
        for x in config.stations() {
            let fx = f(x)?;
            let ix = self.interpolate(x, &mut f)?;
            let err = (fx - ix).abs();
            if err > estimate.max_error {
                estimate.max_error = err;
                estimate.location = x;
            }
        }
        debug!(
            degree = self.degree(),
            n_stations = config.n_stations(),
            max_error = estimate.max_error,
            location = estimate.location,
            "estimated max interpolation error"
        );
        Ok(estimate)
    }

    /// Parallel [`estimate_max_error_with`](Self::estimate_max_error_with).
    ///
    /// Returns the same estimate as the sequential version, ties going to
    /// the lowest station. If `f` fails at several stations, which of those
    /// failures is returned is unspecified.
    #[cfg(feature = "parallel")]
    pub fn estimate_max_error_parallel<F, E>(
        &self,
        config: &DiagnosticsConfig,
        f: F,
    ) -> Result<MaxErrorEstimate, E>
    where
        F: Fn(f64) -> Result<f64, E> + Sync,
        E: Send,
    {
        use rayon::prelude::*;

        // (error, station index); usize::MAX marks "no candidate yet"
        let none = (0.0, usize::MAX);
        let pick = |a: (f64, usize), b: (f64, usize)| {
            if b.0 > a.0 || (b.0 == a.0 && b.1 < a.1) { b } else { a }
        };

        let (max_error, j) = (0..config.n_stations())
            .into_par_iter()
            .map(|j| -> Result<(f64, usize), E> {
                let x = config.station(j);
                let err = (f(x)? - self.interpolate(x, &f)?).abs();
                Ok(if err > 0.0 { (err, j) } else { none })
            })
            .try_reduce(|| none, |a, b| Ok(pick(a, b)))?;

        let estimate = MaxErrorEstimate {
            max_error,
            location: if j == usize::MAX { -1.0 } else { config.station(j) },
        };
        debug!(
            degree = self.degree(),
            n_stations = config.n_stations(),
            max_error = estimate.max_error,
            location = estimate.location,
            "estimated max interpolation error (parallel)"
        );
        Ok(estimate)
    }
}
