//! Developer index registry.
//!
//! Every distinct developer identifier gets a 1-based index in order of
//! first observation. Indices are never reassigned, so they stay valid for
//! the whole run and can be used to encode developers compactly.

use crate::utils::error::RegistryError;
use log::trace;
use std::collections::HashMap;

/// Stable developer identifier → index mapping shared by all inputs of a run
#[derive(Debug, Clone, Default)]
pub struct DeveloperRegistry {
    indices: HashMap<String, usize>,
    ordered: Vec<String>,
}

impl DeveloperRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a developer, assigning `size() + 1` if unseen.
    /// Already known identifiers are left untouched.
    pub fn register(&mut self, developer: &str) {
        if self.indices.contains_key(developer) {
            return;
        }
        self.ordered.push(developer.to_string());
        let index = self.ordered.len();
        trace!("New developer registered: {} -> {}", developer, index);
        self.indices.insert(developer.to_string(), index);
    }

    /// Number of distinct developers registered so far
    pub fn size(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Index assigned to `developer`
    ///
    /// # Errors
    /// * `RegistryError::UnknownDeveloper` - the identifier was never registered
    pub fn index_of(&self, developer: &str) -> Result<usize, RegistryError> {
        self.indices
            .get(developer)
            .copied()
            .ok_or_else(|| RegistryError::UnknownDeveloper(developer.to_string()))
    }

    /// Identifiers by ascending index: position `i` holds index `i + 1`
    pub fn ordered_identifiers(&self) -> &[String] {
        &self.ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_start_at_one_in_first_seen_order() {
        let mut registry = DeveloperRegistry::new();
        registry.register("carol");
        registry.register("alice");
        registry.register("bob");

        assert_eq!(registry.index_of("carol"), Ok(1));
        assert_eq!(registry.index_of("alice"), Ok(2));
        assert_eq!(registry.index_of("bob"), Ok(3));
        assert_eq!(registry.ordered_identifiers(), ["carol", "alice", "bob"]);
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = DeveloperRegistry::new();
        registry.register("alice");
        let before = registry.index_of("alice").unwrap();

        registry.register("bob");
        registry.register("alice");

        assert_eq!(registry.index_of("alice"), Ok(before));
        assert_eq!(registry.size(), 2);
    }

    #[test]
    fn test_unknown_developer() {
        let registry = DeveloperRegistry::new();
        assert_eq!(
            registry.index_of("ghost"),
            Err(RegistryError::UnknownDeveloper("ghost".to_string()))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_indices_are_dense() {
        let mut registry = DeveloperRegistry::new();
        for dev in ["a", "b", "a", "c", "b", "d", "a"] {
            registry.register(dev);
        }

        assert_eq!(registry.size(), 4);
        for (position, dev) in registry.ordered_identifiers().iter().enumerate() {
            assert_eq!(registry.index_of(dev), Ok(position + 1));
        }
    }
}
