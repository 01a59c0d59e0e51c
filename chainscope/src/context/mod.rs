//! Execution-context tracking for nested chain invocations.
//!
//! This module provides:
//! - [`ContextFrame`]: the recorded state of one component activation
//! - [`ContextTracker`]: the per-event dual-stack tracker that opens,
//!   closes, and resolves frames

#[cfg(test)]
mod context_tests;
mod frame;
mod tracker;

pub use frame::{ContextFrame, ContextFrameBuilder};
pub use tracker::ContextTracker;
