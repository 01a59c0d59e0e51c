//! # Chainscope
//!
//! Nested execution-context tracking for chain-orchestration engines.
//!
//! Chainscope tracks the state of recursively-nested invocations of named
//! processing components ("chains") inside one in-flight unit of work
//! ("event"):
//!
//! - **Frames**: each activation of a component gets a [`ContextFrame`]
//!   with an immutable identity (location, parent, root) and a mutable
//!   scoped variable store
//! - **Dual-stack tracking**: a per-event [`ContextTracker`] keeps a global
//!   activation stack plus one stack per component identity, so a component
//!   can always resolve its own innermost open activation
//! - **Forking**: a tracker can be duplicated into an independent snapshot
//!   when an event splits into parallel branches
//!
//! ## Quick Start
//!
//! ```rust
//! use chainscope::prelude::*;
//!
//! let mut tracker = ContextTracker::new();
//!
//! let outer = tracker
//!     .open(ComponentLocation::new(ComponentIdentifier::new("ns1", "comp-a")))
//!     .unwrap();
//! outer.set_variable("attempt", serde_json::json!(1));
//!
//! let inner = tracker
//!     .open(ComponentLocation::new(ComponentIdentifier::new("ns1", "comp-b")))
//!     .unwrap();
//! assert!(std::sync::Arc::ptr_eq(inner.parent().unwrap(), &outer));
//!
//! tracker.close().unwrap();
//! tracker.close().unwrap();
//! assert!(tracker.is_empty());
//! ```
//!
//! [`ContextFrame`]: context::ContextFrame
//! [`ContextTracker`]: context::ContextTracker

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod collections;
pub mod component;
pub mod connection;
pub mod context;
pub mod errors;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::collections::{CaseInsensitiveMultiMap, ImmutableMultiMapView};
    pub use crate::component::{ComponentIdentifier, ComponentKey, ComponentLocation};
    pub use crate::connection::{
        ConnectionHandlingStrategy, ConnectionProvider, PooledProviderWrapper, PoolingProfile,
    };
    pub use crate::context::{ContextFrame, ContextFrameBuilder, ContextTracker};
    pub use crate::errors::{ChainScopeError, IllegalStateError, InvalidArgumentError};
}
