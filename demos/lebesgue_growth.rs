//! Lebesgue constant growth for each built-in grid kind.
//!
//! Prints Λ_N for N = 1..=20. Uniform grids grow exponentially, the
//! Chebyshev and Legendre-Lobatto grids only logarithmically.
//!
//! Set `RUST_LOG=lagrange_rs=debug` to see the estimator events.

use lagrange_rs::{GridRegistry, LagrangeInterpolant};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = GridRegistry::builtin();
    let kinds: Vec<(&str, &str)> = registry.kinds().collect();

    println!("Lebesgue constants (10000 stations)");
    println!("===================================");
    for (name, description) in &kinds {
        println!("{name:>24}: {description}");
    }
    println!();

    print!("{:>4}", "N");
    for (name, _) in &kinds {
        print!("{name:>26}");
    }
    println!();

    for degree in 1..=20 {
        print!("{degree:>4}");
        for (name, _) in &kinds {
            let interp = LagrangeInterpolant::new(degree, name)?;
            print!("{:>26.6}", interp.estimate_lebesgue_constant());
        }
        println!();
    }

    Ok(())
}
