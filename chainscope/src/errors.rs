//! Error types for the chainscope crate.
//!
//! Every failure in this crate is synchronous and deterministic: it is
//! detected before any state is mutated and surfaces directly to the caller
//! of the violating operation. Nothing is logged or swallowed internally.

use thiserror::Error;

/// The main error type for chainscope operations.
#[derive(Debug, Error)]
pub enum ChainScopeError {
    /// A caller supplied an invalid argument.
    #[error("{0}")]
    InvalidArgument(#[from] InvalidArgumentError),

    /// An operation was invoked in a state where it is not legal.
    #[error("{0}")]
    IllegalState(#[from] IllegalStateError),
}

/// Error raised when an argument fails validation.
///
/// Raised before any mutation takes place; tracker state is unchanged.
#[derive(Debug, Clone, Error)]
#[error("Invalid argument: {message}")]
pub struct InvalidArgumentError {
    /// The reason the argument is invalid.
    pub message: String,
}

impl InvalidArgumentError {
    /// Creates a new invalid argument error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error raised when an operation is invoked in an illegal state.
///
/// This signals a programming error in the caller's chain-nesting logic
/// (e.g. closing a frame when none is open), not a recoverable runtime
/// condition.
#[derive(Debug, Clone, Error)]
#[error("Illegal state: {message}")]
pub struct IllegalStateError {
    /// The state violation description.
    pub message: String,
}

impl IllegalStateError {
    /// Creates a new illegal state error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
