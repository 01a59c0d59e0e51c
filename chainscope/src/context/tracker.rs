//! Per-event tracking of nested chain activations.

use crate::component::{ComponentKey, ComponentLocation};
use crate::context::ContextFrame;
use crate::errors::{ChainScopeError, IllegalStateError, InvalidArgumentError};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Tracks every open [`ContextFrame`] for one in-flight event.
///
/// The tracker keeps two indexes over the same shared frames: a global
/// activation stack recording total nesting order across all components,
/// and one stack per component identity so that a component can always find
/// its own most recent still-open activation, however deeply other
/// components are nested in between. Both indexes are updated together by
/// [`open`](ContextTracker::open) and [`close`](ContextTracker::close), so a
/// frame is either present in both or in neither.
///
/// One tracker belongs to exactly one event and is only ever mutated by the
/// single logical thread currently processing that event; there is no
/// internal synchronization and no operation blocks.
#[derive(Debug, Default)]
pub struct ContextTracker {
    /// Total activation order across all components; top is the last
    /// element.
    global_stack: Vec<Arc<ContextFrame>>,
    /// Per-component activation stacks, keyed by case-folded identity.
    stacks_by_component: HashMap<ComponentKey, Vec<Arc<ContextFrame>>>,
    /// Correlation id of the owning event, for log fields only.
    event_id: Option<Uuid>,
}

impl ContextTracker {
    /// Creates an empty tracker for a new event.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the owning event's correlation id for log fields.
    #[must_use]
    pub fn with_event_id(mut self, event_id: Uuid) -> Self {
        self.event_id = Some(event_id);
        self
    }

    /// Opens a new frame for an activation at `location`.
    ///
    /// The frame's ancestry is captured from the global stack as it stands
    /// right now: the newest open frame (of any component) becomes the
    /// parent, the oldest becomes the root. The frame is then pushed onto
    /// both the global stack and its component's own stack.
    ///
    /// # Errors
    ///
    /// Returns [`ChainScopeError::InvalidArgument`] if the location's
    /// namespace or name is empty. Nothing is mutated on failure.
    pub fn open(
        &mut self,
        location: ComponentLocation,
    ) -> Result<Arc<ContextFrame>, ChainScopeError> {
        let identifier = location.identifier();
        validate_identity(identifier.namespace(), identifier.name())?;

        let frame = self.push_frame(location);
        tracing::debug!(
            component = %ComponentKey::of_location(frame.location()),
            depth = self.global_stack.len(),
            event_id = ?self.event_id,
            "opened context frame"
        );
        Ok(frame)
    }

    /// Closes the most recently opened frame and returns it.
    ///
    /// Closing is strict LIFO over the *global* stack: frames must be
    /// closed in exact reverse order of opening, even across component
    /// identities. The frame is removed from both indexes; it stays alive
    /// only through `parent`/`root` handles held by descendants created
    /// while it was open.
    ///
    /// # Errors
    ///
    /// Returns [`ChainScopeError::IllegalState`] if no frame is open.
    /// Nothing is mutated on failure.
    pub fn close(&mut self) -> Result<Arc<ContextFrame>, ChainScopeError> {
        let frame = self
            .global_stack
            .pop()
            .ok_or_else(|| IllegalStateError::new("no open frame to close"))?;

        let key = ComponentKey::of_location(frame.location());
        if let Some(stack) = self.stacks_by_component.get_mut(&key) {
            if let Some(position) = stack.iter().rposition(|f| Arc::ptr_eq(f, &frame)) {
                stack.remove(position);
            }
        }

        tracing::debug!(
            component = %key,
            depth = self.global_stack.len(),
            event_id = ?self.event_id,
            "closed context frame"
        );
        Ok(frame)
    }

    /// Returns the most recently opened, still-open frame for the given
    /// component identity, if any.
    ///
    /// Consults only that component's own stack, so the answer is
    /// unaffected by whatever other components were activated in between.
    ///
    /// # Errors
    ///
    /// Returns [`ChainScopeError::InvalidArgument`] if `namespace` or
    /// `name` is empty.
    pub fn lookup(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<Option<Arc<ContextFrame>>, ChainScopeError> {
        validate_identity(namespace, name)?;

        let key = ComponentKey::new(namespace, name);
        Ok(self
            .stacks_by_component
            .get(&key)
            .and_then(|stack| stack.last())
            .cloned())
    }

    /// Produces an independent tracker holding a structurally equivalent
    /// copy of every currently open frame, for forking an event into
    /// parallel branches.
    ///
    /// The source's global stack is replayed oldest-first onto the copy,
    /// which reconstructs both indexes and all parent/root relationships,
    /// and each replayed frame receives a snapshot of its source frame's
    /// variables. The two trackers share no mutable state afterwards.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        let mut copy = Self {
            global_stack: Vec::with_capacity(self.global_stack.len()),
            stacks_by_component: HashMap::new(),
            event_id: self.event_id,
        };

        let source: Vec<Arc<ContextFrame>> = self.global_stack.clone();
        for frame in &source {
            let replayed = copy.push_frame(frame.location().clone());
            for (key, value) in frame.variables() {
                replayed.set_variable(key, value);
            }
        }

        tracing::debug!(
            frames = copy.global_stack.len(),
            event_id = ?self.event_id,
            "duplicated context tracker"
        );
        copy
    }

    /// Returns the newest open frame without closing it.
    #[must_use]
    pub fn current(&self) -> Option<&Arc<ContextFrame>> {
        self.global_stack.last()
    }

    /// Returns the number of open frames.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.global_stack.len()
    }

    /// Returns true if no frame is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.global_stack.is_empty()
    }

    /// Returns the number of component identities with at least one open
    /// activation.
    #[must_use]
    pub fn open_component_count(&self) -> usize {
        self.stacks_by_component
            .values()
            .filter(|stack| !stack.is_empty())
            .count()
    }

    /// Builds a frame against the current global stack and pushes it onto
    /// both indexes. Callers validate first.
    fn push_frame(&mut self, location: ComponentLocation) -> Arc<ContextFrame> {
        let key = ComponentKey::of_location(&location);
        let frame = ContextFrame::with_ancestors(location, &self.global_stack);

        self.global_stack.push(frame.clone());
        self.stacks_by_component
            .entry(key)
            .or_default()
            .push(frame.clone());
        frame
    }
}

fn validate_identity(namespace: &str, name: &str) -> Result<(), InvalidArgumentError> {
    if namespace.trim().is_empty() {
        return Err(InvalidArgumentError::new(
            "extension namespace cannot be empty",
        ));
    }
    if name.trim().is_empty() {
        return Err(InvalidArgumentError::new("component name cannot be empty"));
    }
    Ok(())
}
