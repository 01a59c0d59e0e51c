//! Context frames: one activation of a chain component.

use crate::component::ComponentLocation;
use crate::errors::InvalidArgumentError;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// The recorded state of one activation of a chain component.
///
/// A frame's identity is fixed at creation: its [`ComponentLocation`], its
/// `parent` (the most recently opened still-open frame of any component at
/// the moment this one was created) and its `root` (the outermost enclosing
/// activation, or the frame itself when nothing was open). Only the variable
/// payload is mutable, and it stays mutable for the frame's whole lifetime.
///
/// Frames are handed around as `Arc` handles. A child's `parent`/`root`
/// handles keep a closed ancestor reachable for exactly as long as any
/// descendant created before the close still lives; the tracker holds the
/// only other handles, so once an event completes the whole chain is
/// released together.
#[derive(Debug)]
pub struct ContextFrame {
    /// Where in the execution graph this activation occurred.
    location: ComponentLocation,
    /// The enclosing activation at creation time, if any.
    parent: Option<Arc<ContextFrame>>,
    /// The outermost enclosing activation. `None` means the frame is its
    /// own root; resolved in [`ContextFrame::root`] to avoid an `Arc`
    /// self-cycle.
    root: Option<Arc<ContextFrame>>,
    /// Scoped variables, readable and writable for the frame's lifetime.
    variables: RwLock<HashMap<String, serde_json::Value>>,
    /// When the frame was opened.
    opened_at: DateTime<Utc>,
}

impl ContextFrame {
    /// Starts building a new frame.
    #[must_use]
    pub fn builder() -> ContextFrameBuilder {
        ContextFrameBuilder::default()
    }

    /// Builds a frame whose ancestry is captured from `ancestors`, the
    /// still-open frames at creation time ordered oldest-first. The tracker
    /// validates the location before calling this.
    pub(crate) fn with_ancestors(
        location: ComponentLocation,
        ancestors: &[Arc<ContextFrame>],
    ) -> Arc<ContextFrame> {
        Arc::new(ContextFrame {
            location,
            parent: ancestors.last().cloned(),
            // Left None when the frame is its own root; see `root()`.
            root: ancestors.first().cloned(),
            variables: RwLock::new(HashMap::new()),
            opened_at: Utc::now(),
        })
    }

    /// Returns the location this frame was opened for.
    #[must_use]
    pub fn location(&self) -> &ComponentLocation {
        &self.location
    }

    /// Returns the parent frame, if this frame was opened while another
    /// activation was in flight.
    #[must_use]
    pub fn parent(&self) -> Option<&Arc<ContextFrame>> {
        self.parent.as_ref()
    }

    /// Returns the root of this frame's ancestor chain.
    ///
    /// A frame opened with no enclosing activation is its own root.
    #[must_use]
    pub fn root(self: &Arc<Self>) -> Arc<ContextFrame> {
        self.root.clone().unwrap_or_else(|| Arc::clone(self))
    }

    /// Returns the depth of this frame's ancestor chain (0 for a root
    /// frame).
    #[must_use]
    pub fn ancestry_depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent.as_ref();
        while let Some(frame) = current {
            depth += 1;
            current = frame.parent.as_ref();
        }
        depth
    }

    /// Returns when this frame was opened.
    #[must_use]
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Gets a variable's value, if set.
    #[must_use]
    pub fn get_variable(&self, key: &str) -> Option<serde_json::Value> {
        self.variables.read().get(key).cloned()
    }

    /// Checks whether a variable is set.
    #[must_use]
    pub fn has_variable(&self, key: &str) -> bool {
        self.variables.read().contains_key(key)
    }

    /// Sets a variable, overwriting any previous value. Last write wins.
    pub fn set_variable(&self, key: impl Into<String>, value: serde_json::Value) {
        self.variables.write().insert(key.into(), value);
    }

    /// Returns a copy of the full variable map.
    #[must_use]
    pub fn variables(&self) -> HashMap<String, serde_json::Value> {
        self.variables.read().clone()
    }

    /// Returns all set variable keys.
    #[must_use]
    pub fn variable_keys(&self) -> Vec<String> {
        self.variables.read().keys().cloned().collect()
    }
}

/// Builder for [`ContextFrame`].
#[derive(Debug, Default)]
pub struct ContextFrameBuilder {
    location: Option<ComponentLocation>,
    ancestors: Vec<Arc<ContextFrame>>,
}

impl ContextFrameBuilder {
    /// Sets the location the frame is opened for. Required.
    #[must_use]
    pub fn location(mut self, location: ComponentLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Sets the ancestor chain: every still-open frame at creation time,
    /// ordered oldest-first. The newest becomes the frame's parent and the
    /// oldest its root.
    #[must_use]
    pub fn ancestors(mut self, ancestors: &[Arc<ContextFrame>]) -> Self {
        self.ancestors = ancestors.to_vec();
        self
    }

    /// Builds the frame.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if no location was supplied.
    pub fn build(self) -> Result<Arc<ContextFrame>, InvalidArgumentError> {
        let location = self
            .location
            .ok_or_else(|| InvalidArgumentError::new("component location cannot be absent"))?;

        Ok(ContextFrame::with_ancestors(location, &self.ancestors))
    }
}
