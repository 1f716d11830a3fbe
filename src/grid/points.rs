//! Immutable grid of interpolation nodes.

use std::ops::Index;

use crate::error::{InterpError, Result};

/// Ordered sequence of N+1 pairwise distinct nodes in [-1, 1].
///
/// Grids produced by a [`NodeGenerator`](super::NodeGenerator) are trusted;
/// grids built from caller data go through [`Grid::new`], which checks the
/// invariants once so that evaluation never has to.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    points: Vec<f64>,
}

impl Grid {
    /// Build a grid from caller-supplied points.
    ///
    /// Rejects empty input, non-finite values, points outside [-1, 1] and
    /// duplicated points.
    pub fn new(points: Vec<f64>) -> Result<Self> {
        if points.is_empty() {
            return Err(InterpError::InvalidGrid {
                reason: "grid needs at least one point".to_string(),
            });
        }

        if let Some((i, &x)) = points
            .iter()
            .enumerate()
            .find(|&(_, x)| !x.is_finite() || x.abs() > 1.0)
        {
            return Err(InterpError::InvalidGrid {
                reason: format!("point {i} = {x} is not a finite value in [-1, 1]"),
            });
        }

        let mut sorted = points.clone();
        sorted.sort_by(f64::total_cmp);
        if let Some(pair) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(InterpError::InvalidGrid {
                reason: format!("duplicated point {}", pair[0]),
            });
        }

        Ok(Self { points })
    }

    /// Wrap generator output without re-validating it.
    pub(crate) fn from_generated(points: Vec<f64>) -> Self {
        Self { points }
    }

    /// Grid points in generation order.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Number of nodes (N+1).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed grid.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Polynomial degree N supported by this grid.
    pub fn degree(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

impl Index<usize> for Grid {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.points[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_distinct_points() {
        let grid = Grid::new(vec![0.5, -1.0, 1.0]).unwrap();
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.degree(), 2);
        // Order is preserved, not sorted
        assert_eq!(grid[0], 0.5);
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            Grid::new(vec![]),
            Err(InterpError::InvalidGrid { .. })
        ));
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = Grid::new(vec![-1.0, 0.25, 1.0, 0.25]).unwrap_err();
        assert!(matches!(err, InterpError::InvalidGrid { .. }));
    }

    #[test]
    fn test_rejects_out_of_range_and_nan() {
        assert!(Grid::new(vec![-1.0, 1.5]).is_err());
        assert!(Grid::new(vec![-1.0, f64::NAN]).is_err());
        assert!(Grid::new(vec![f64::INFINITY]).is_err());
    }

    #[test]
    fn test_single_point() {
        let grid = Grid::new(vec![0.0]).unwrap();
        assert_eq!(grid.degree(), 0);
        assert!(!grid.is_empty());
    }
}
