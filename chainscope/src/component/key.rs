//! Derived case-folded lookup keys.

use super::{ComponentIdentifier, ComponentLocation};

/// Case-folded lookup key derived from a component's (namespace, name) pair.
///
/// Keys are never stored on frames; they exist only to index the tracker's
/// per-component stacks. Two identifiers differing only in case derive the
/// same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentKey {
    namespace: String,
    name: String,
}

impl ComponentKey {
    /// Derives a key from raw namespace and name strings.
    #[must_use]
    pub fn new(namespace: &str, name: &str) -> Self {
        Self {
            namespace: namespace.to_uppercase(),
            name: name.to_uppercase(),
        }
    }

    /// Derives a key from a component identifier.
    #[must_use]
    pub fn of_identifier(identifier: &ComponentIdentifier) -> Self {
        Self::new(identifier.namespace(), identifier.name())
    }

    /// Derives a key from a component location.
    #[must_use]
    pub fn of_location(location: &ComponentLocation) -> Self {
        Self::of_identifier(location.identifier())
    }

    /// Returns the folded namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the folded name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}
