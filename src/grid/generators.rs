//! Node generation strategies.
//!
//! Every strategy returns N+1 pairwise distinct nodes in ascending order on
//! [-1, 1]. The interpolant relies on distinctness without checking it, so a
//! new strategy must guarantee it by construction.

use std::f64::consts::FRAC_PI_2;

/// Produces the N+1 nodes of a grid for a given degree N.
pub trait NodeGenerator: Send + Sync {
    /// Generate `degree + 1` ascending, pairwise distinct nodes in [-1, 1].
    fn nodes(&self, degree: usize) -> Vec<f64>;

    /// Short human-readable description of the grid kind.
    fn description(&self) -> &str;
}

/// Equally spaced nodes with both endpoints included.
///
/// x_i = -1 + 2i/N for N > 0. A degree-0 grid is the single start value -1,
/// the linear-spacing convention for one point.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl NodeGenerator for Uniform {
    fn nodes(&self, degree: usize) -> Vec<f64> {
        if degree == 0 {
            return vec![-1.0];
        }
        let n = degree as f64;
        (0..=degree).map(|i| -1.0 + 2.0 * i as f64 / n).collect()
    }

    fn description(&self) -> &str {
        "Uniform 1D grid"
    }
}

/// Chebyshev-Gauss-Lobatto nodes, the extrema of T_N.
///
/// Evaluated as x_j = sin(π(2j - N) / 2N), which equals -cos(πj/N) but keeps
/// the endpoints and the centre node exact.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChebyshevGaussLobatto;

impl NodeGenerator for ChebyshevGaussLobatto {
    fn nodes(&self, degree: usize) -> Vec<f64> {
        if degree == 0 {
            return vec![0.0];
        }
        let n = degree as f64;
        (0..=degree)
            .map(|j| (FRAC_PI_2 * ((2.0 * j as f64 - n) / n)).sin())
            .collect()
    }

    fn description(&self) -> &str {
        "Chebyshev-Gauss-Lobatto 1D grid"
    }
}

/// Gauss-Lobatto-Legendre nodes, the roots of (1-x²)P'_N(x).
///
/// Interior nodes are found by Newton iteration starting from the
/// Chebyshev-Gauss-Lobatto nodes.
#[derive(Debug, Clone, Copy)]
pub struct GaussLobattoLegendre {
    /// Newton iteration cap per node
    pub max_iterations: usize,
    /// Stop once the Newton update falls below this
    pub tolerance: f64,
}

impl Default for GaussLobattoLegendre {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-15,
        }
    }
}

impl NodeGenerator for GaussLobattoLegendre {
    fn nodes(&self, degree: usize) -> Vec<f64> {
        let n = degree;
        let mut nodes = ChebyshevGaussLobatto.nodes(n);
        if n < 2 {
            return nodes;
        }

        for x in nodes.iter_mut().take(n).skip(1) {
            for _ in 0..self.max_iterations {
                let (p_n, p_nm1) = legendre_pair(n, *x);
                // (1-x²)P'_N = N (P_{N-1} - x P_N), and its derivative is -N(N+1) P_N
                let update = (p_nm1 - *x * p_n) / ((n + 1) as f64 * p_n);
                *x += update;
                if update.abs() < self.tolerance {
                    break;
                }
            }
        }

        nodes
    }

    fn description(&self) -> &str {
        "Gauss-Lobatto-Legendre 1D grid"
    }
}

/// Legendre values (P_n(x), P_{n-1}(x)) by three-term recurrence, n ≥ 1.
fn legendre_pair(n: usize, x: f64) -> (f64, f64) {
    let mut p_prev = 1.0;
    let mut p_curr = x;
    for k in 1..n {
        let k = k as f64;
        let p_next = ((2.0 * k + 1.0) * x * p_curr - k * p_prev) / (k + 1.0);
        p_prev = p_curr;
        p_curr = p_next;
    }
    (p_curr, p_prev)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_ascending_distinct(nodes: &[f64]) {
        for w in nodes.windows(2) {
            assert!(w[0] < w[1], "nodes not strictly ascending: {:?}", nodes);
        }
    }

    #[test]
    fn test_uniform_known_nodes() {
        let nodes = Uniform.nodes(2);
        assert_eq!(nodes, vec![-1.0, 0.0, 1.0]);

        let nodes = Uniform.nodes(4);
        assert_eq!(nodes, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_uniform_degree_zero() {
        assert_eq!(Uniform.nodes(0), vec![-1.0]);
    }

    #[test]
    fn test_node_count_and_endpoints() {
        let generators: [&dyn NodeGenerator; 3] =
            [&Uniform, &ChebyshevGaussLobatto, &GaussLobattoLegendre::default()];
        for generator in generators {
            for degree in 1..=12 {
                let nodes = generator.nodes(degree);
                assert_eq!(nodes.len(), degree + 1);
                assert_eq!(nodes[0], -1.0, "{}", generator.description());
                assert_eq!(nodes[degree], 1.0, "{}", generator.description());
                assert_ascending_distinct(&nodes);
            }
        }
    }

    #[test]
    fn test_chebyshev_matches_cosine_form() {
        let degree = 7;
        let nodes = ChebyshevGaussLobatto.nodes(degree);
        for (j, &x) in nodes.iter().enumerate() {
            let expected = -(std::f64::consts::PI * j as f64 / degree as f64).cos();
            assert!((x - expected).abs() < 1e-15);
        }
    }

    #[test]
    fn test_symmetry() {
        for degree in 1..=9 {
            let cheb = ChebyshevGaussLobatto.nodes(degree);
            let gll = GaussLobattoLegendre::default().nodes(degree);
            for i in 0..=degree {
                assert!((cheb[i] + cheb[degree - i]).abs() < 1e-14);
                assert!((gll[i] + gll[degree - i]).abs() < 1e-14);
            }
        }
    }

    #[test]
    fn test_gll_interior_nodes_are_derivative_roots() {
        for degree in 2..=8 {
            let nodes = GaussLobattoLegendre::default().nodes(degree);
            for &x in &nodes[1..degree] {
                let (p_n, p_nm1) = legendre_pair(degree, x);
                // Proportional to P'_N(x) away from the endpoints
                let residual = p_nm1 - x * p_n;
                assert!(residual.abs() < 1e-13, "degree {degree}: residual {residual}");
            }
        }
    }

    #[test]
    fn test_gll_known_nodes() {
        let nodes = GaussLobattoLegendre::default().nodes(3);
        let inner = (1.0f64 / 5.0).sqrt();
        assert!((nodes[1] + inner).abs() < 1e-14);
        assert!((nodes[2] - inner).abs() < 1e-14);
    }
}
