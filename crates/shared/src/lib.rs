//! Shared types for Flipdash.
//!
//! This crate provides the common identifier types used across all other
//! crates:
//! - Typed UUID wrappers for type-safe entity references
//! - The small-integer budget-group key

pub mod types;

pub use types::{GroupId, PropertyId, TransactionId};
