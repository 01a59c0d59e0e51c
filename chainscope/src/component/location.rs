//! Component identifiers and activation-site locations.

use serde::{Deserialize, Serialize};

/// The stable identity of a chain component: extension namespace plus
/// component name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentIdentifier {
    /// The extension namespace (e.g. the module that contributes the
    /// component).
    namespace: String,
    /// The component name within its namespace.
    name: String,
}

impl ComponentIdentifier {
    /// Creates a new identifier from a namespace and a name.
    #[must_use]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Returns the extension namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the component name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for ComponentIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.name)
    }
}

/// Where in the deployed execution graph an activation occurs.
///
/// Supplied by the engine; opaque to the tracker except for the
/// [`ComponentIdentifier`] used for keying. The `path` is the engine's own
/// positional notation and is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentLocation {
    /// The identity of the component activated at this location.
    identifier: ComponentIdentifier,
    /// The engine's positional path for this activation site.
    path: String,
}

impl ComponentLocation {
    /// Creates a new location with an empty path.
    #[must_use]
    pub fn new(identifier: ComponentIdentifier) -> Self {
        Self {
            identifier,
            path: String::new(),
        }
    }

    /// Sets the positional path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Returns the component identifier.
    #[must_use]
    pub fn identifier(&self) -> &ComponentIdentifier {
        &self.identifier
    }

    /// Returns the positional path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl std::fmt::Display for ComponentLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.identifier)
        } else {
            write!(f, "{} @ {}", self.identifier, self.path)
        }
    }
}
