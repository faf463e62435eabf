//! Integration test utilities for the feed client
//!
//! Provides a scriptable in-memory gateway and JSON payload builders for
//! exercising the services end to end without a live backend.

pub mod fixtures;

pub use fixtures::*;
pub use helpers::*;
