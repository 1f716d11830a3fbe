//! Runge phenomenon: interpolating f(x) = 1 / (1 + 25x²).
//!
//! On a uniform grid the maximum error grows with N near the endpoints;
//! on Chebyshev-Gauss-Lobatto nodes it decays geometrically.

use lagrange_rs::{CHEBYSHEV_GAUSS_LOBATTO, LagrangeInterpolant, UNIFORM};
use std::convert::Infallible;
use tracing_subscriber::EnvFilter;

fn runge(x: f64) -> Result<f64, Infallible> {
    Ok(1.0 / (1.0 + 25.0 * x * x))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Runge function max interpolation error");
    println!("======================================");
    println!(
        "{:>4} {:>14} {:>10} {:>14} {:>10}",
        "N", "uniform", "at x", "chebyshev", "at x"
    );

    for degree in (2..=24).step_by(2) {
        let uniform = LagrangeInterpolant::new(degree, UNIFORM)?;
        let cheb = LagrangeInterpolant::new(degree, CHEBYSHEV_GAUSS_LOBATTO)?;

        let Ok(eu) = uniform.estimate_max_error(runge);
        let Ok(ec) = cheb.estimate_max_error(runge);

        println!(
            "{:>4} {:>14.6e} {:>10.4} {:>14.6e} {:>10.4}",
            degree, eu.max_error, eu.location, ec.max_error, ec.location
        );
    }

    Ok(())
}
