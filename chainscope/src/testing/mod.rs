//! Test utilities for exercising context tracking.

mod fixtures;

pub use fixtures::{test_location, TestLocation};
