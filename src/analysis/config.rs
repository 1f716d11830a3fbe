//! Sampling configuration for the dense-grid estimators.

/// Station count used when no configuration is given.
pub const DEFAULT_STATIONS: usize = 10_000;

/// Configuration for the dense-sampling diagnostics.
///
/// Stations are x_j = -1 + 2j/(n-1), j = 0..n, so both endpoints of [-1, 1]
/// are always sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticsConfig {
    n_stations: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            n_stations: DEFAULT_STATIONS,
        }
    }
}

impl DiagnosticsConfig {
    /// Set the number of sampling stations (clamped to at least 2).
    pub fn with_n_stations(mut self, n_stations: usize) -> Self {
        self.n_stations = n_stations.max(2);
        self
    }

    pub fn n_stations(&self) -> usize {
        self.n_stations
    }

    /// Abscissa of station j.
    #[inline]
    pub fn station(&self, j: usize) -> f64 {
        -1.0 + 2.0 * j as f64 / (self.n_stations - 1) as f64
    }

    /// All stations in ascending order.
    pub fn stations(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.n_stations).map(|j| self.station(j))
    }
}
