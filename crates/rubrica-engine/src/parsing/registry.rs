use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Expected document shape for one registered area: how many actions in
/// total, and how they distribute over objectives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedStructure {
    pub total_acciones: usize,
    /// objective number → expected action count.
    pub distribution: BTreeMap<u32, usize>,
}

impl ExpectedStructure {
    pub fn new(total_acciones: usize, distribution: impl IntoIterator<Item = (u32, usize)>) -> Self {
        Self {
            total_acciones,
            distribution: distribution.into_iter().collect(),
        }
    }
}

/// Data-driven registry of area identifiers and their expected structures.
/// Adding an area is a registry entry, not parser code.
#[derive(Debug, Clone, Default)]
pub struct AreaRegistry {
    areas: BTreeMap<String, ExpectedStructure>,
}

impl AreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three production areas and their hand-counted structures.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(
            "personalizacion",
            ExpectedStructure::new(11, [(1, 3), (2, 2), (3, 2), (4, 2), (5, 2)]),
        );
        registry.insert(
            "aprendizaje",
            ExpectedStructure::new(17, [(1, 5), (2, 4), (3, 2), (4, 2), (5, 2), (6, 2)]),
        );
        registry.insert(
            "evaluacion",
            ExpectedStructure::new(9, [(1, 4), (2, 5)]),
        );
        registry
    }

    pub fn insert(&mut self, area: impl Into<String>, expected: ExpectedStructure) {
        self.areas.insert(area.into(), expected);
    }

    pub fn get(&self, area: &str) -> Option<&ExpectedStructure> {
        self.areas.get(area)
    }

    /// Registered identifiers in sorted order, for diagnostics.
    pub fn known_areas(&self) -> Vec<&str> {
        self.areas.keys().map(String::as_str).collect()
    }
}

/// Shared instance of the builtin registry.
pub fn builtin_registry() -> &'static AreaRegistry {
    static REGISTRY: OnceLock<AreaRegistry> = OnceLock::new();
    REGISTRY.get_or_init(AreaRegistry::builtin)
}
