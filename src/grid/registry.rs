//! Name-based lookup of node generators.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use tracing::debug;

use super::generators::{ChebyshevGaussLobatto, GaussLobattoLegendre, NodeGenerator, Uniform};
use super::points::Grid;
use crate::error::{InterpError, Result};

/// Identifier of the equally spaced grid.
pub const UNIFORM: &str = "uniform";
/// Identifier of the Chebyshev-Gauss-Lobatto grid.
pub const CHEBYSHEV_GAUSS_LOBATTO: &str = "chebyshev-gauss-lobatto";
/// Identifier of the Gauss-Lobatto-Legendre grid.
pub const GAUSS_LOBATTO_LEGENDRE: &str = "gauss-lobatto-legendre";

static BUILTIN: LazyLock<GridRegistry> = LazyLock::new(GridRegistry::default);

/// Maps grid-kind identifiers to node generators.
///
/// Lookups are exact matches on the identifier. The default registry knows
/// [`UNIFORM`], [`CHEBYSHEV_GAUSS_LOBATTO`] and [`GAUSS_LOBATTO_LEGENDRE`].
pub struct GridRegistry {
    generators: BTreeMap<String, Box<dyn NodeGenerator>>,
}

impl GridRegistry {
    /// Registry with no grid kinds.
    pub fn empty() -> Self {
        Self {
            generators: BTreeMap::new(),
        }
    }

    /// Shared registry holding the built-in grid kinds.
    pub fn builtin() -> &'static GridRegistry {
        &BUILTIN
    }

    /// Register a generator under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, generator: impl NodeGenerator + 'static) {
        let name = name.into();
        debug!(grid_kind = %name, description = generator.description(), "registering grid kind");
        self.generators.insert(name, Box::new(generator));
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, name: impl Into<String>, generator: impl NodeGenerator + 'static) -> Self {
        self.register(name, generator);
        self
    }

    /// Look up the generator for `name`.
    pub fn get(&self, name: &str) -> Result<&dyn NodeGenerator> {
        self.generators
            .get(name)
            .map(|g| g.as_ref())
            .ok_or_else(|| InterpError::UnknownGridKind {
                name: name.to_string(),
            })
    }

    /// Whether a generator is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.generators.contains_key(name)
    }

    /// Registered identifiers with their descriptions, sorted by identifier.
    pub fn kinds(&self) -> impl Iterator<Item = (&str, &str)> {
        self.generators
            .iter()
            .map(|(name, g)| (name.as_str(), g.description()))
    }

    /// Generate the degree-N grid of kind `name`.
    pub fn generate(&self, name: &str, degree: usize) -> Result<Grid> {
        let generator = self.get(name)?;
        let points = generator.nodes(degree);
        if points.len() != degree + 1 {
            return Err(InterpError::InvalidGrid {
                reason: format!(
                    "generator {name:?} returned {} nodes for degree {degree}",
                    points.len()
                ),
            });
        }
        debug!(grid_kind = name, degree, "generated grid");
        Ok(Grid::from_generated(points))
    }
}

impl Default for GridRegistry {
    fn default() -> Self {
        Self::empty()
            .with(UNIFORM, Uniform)
            .with(CHEBYSHEV_GAUSS_LOBATTO, ChebyshevGaussLobatto)
            .with(GAUSS_LOBATTO_LEGENDRE, GaussLobattoLegendre::default())
    }
}

impl std::fmt::Debug for GridRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.generators.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Midpoints of N+1 equal cells; never touches the endpoints.
    struct CellCentred;

    impl NodeGenerator for CellCentred {
        fn nodes(&self, degree: usize) -> Vec<f64> {
            let h = 2.0 / (degree + 1) as f64;
            (0..=degree).map(|i| -1.0 + h * (i as f64 + 0.5)).collect()
        }

        fn description(&self) -> &str {
            "cell-centred grid"
        }
    }

    /// Always returns two nodes, whatever the degree.
    struct FixedPair;

    impl NodeGenerator for FixedPair {
        fn nodes(&self, _degree: usize) -> Vec<f64> {
            vec![-1.0, 1.0]
        }

        fn description(&self) -> &str {
            "fixed two-point grid"
        }
    }

    #[test]
    fn test_wrong_node_count_rejected() {
        let registry = GridRegistry::empty().with("pair", FixedPair);
        assert!(registry.generate("pair", 1).is_ok());
        assert!(matches!(
            registry.generate("pair", 3),
            Err(InterpError::InvalidGrid { .. })
        ));
    }

    #[test]
    fn test_builtin_kinds() {
        let registry = GridRegistry::builtin();
        assert!(registry.contains(UNIFORM));
        assert!(registry.contains(CHEBYSHEV_GAUSS_LOBATTO));
        assert!(registry.contains(GAUSS_LOBATTO_LEGENDRE));
        assert_eq!(registry.kinds().count(), 3);
    }

    #[test]
    fn test_unknown_kind() {
        let err = GridRegistry::builtin().generate("nonexistent", 3).unwrap_err();
        assert_eq!(
            err,
            InterpError::UnknownGridKind {
                name: "nonexistent".to_string()
            }
        );
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(GridRegistry::builtin().get("Uniform").is_err());
        assert!(GridRegistry::builtin().get(" uniform").is_err());
    }

    #[test]
    fn test_register_custom_kind() {
        let registry = GridRegistry::default().with("cell-centred", CellCentred);
        let grid = registry.generate("cell-centred", 3).unwrap();
        assert_eq!(grid.points(), &[-0.75, -0.25, 0.25, 0.75]);
        assert_eq!(registry.kinds().count(), 4);
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = GridRegistry::empty();
        registry.register(UNIFORM, CellCentred);
        let (_, description) = registry.kinds().next().unwrap();
        assert_eq!(description, "cell-centred grid");
        assert_eq!(registry.kinds().count(), 1);
    }
}
