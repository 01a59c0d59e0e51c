//! Test fixtures for building component locations.

use crate::component::{ComponentIdentifier, ComponentLocation};

/// Shorthand for a location with just a namespace and name.
#[must_use]
pub fn test_location(namespace: &str, name: &str) -> ComponentLocation {
    TestLocation::new(namespace, name).build()
}

/// A builder for test component locations.
#[derive(Debug, Clone)]
pub struct TestLocation {
    namespace: String,
    name: String,
    path: Option<String>,
}

impl TestLocation {
    /// Creates a builder for the given component identity.
    #[must_use]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            path: None,
        }
    }

    /// Sets the positional path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Builds the location. Without an explicit path, a synthetic
    /// `test/{namespace}/{name}` path is used.
    #[must_use]
    pub fn build(self) -> ComponentLocation {
        let path = self
            .path
            .unwrap_or_else(|| format!("test/{}/{}", self.namespace, self.name));
        ComponentLocation::new(ComponentIdentifier::new(self.namespace, self.name))
            .with_path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_is_synthesized() {
        let loc = test_location("ns1", "comp-a");
        assert_eq!(loc.path(), "test/ns1/comp-a");
    }

    #[test]
    fn test_explicit_path_is_kept() {
        let loc = TestLocation::new("ns1", "comp-a")
            .with_path("flow/processors/3")
            .build();
        assert_eq!(loc.path(), "flow/processors/3");
        assert_eq!(loc.identifier().name(), "comp-a");
    }
}
