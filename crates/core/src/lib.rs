//! Core business logic for Flipdash.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, derivation rules, and financial
//! calculations live here.
//!
//! # Modules
//!
//! - `closing` - Sale-closing partition and projection (cost basis, tax, ROI)
//! - `dashboard` - Composed reporting surfaces consumed by the presentation layer
//! - `rollup` - Per-group estimate derivation and totals aggregation
//! - `snapshot` - Folds raw budget and transaction rows into group records

pub mod closing;
pub mod dashboard;
pub mod rollup;
pub mod snapshot;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
///
/// Safe to call more than once; only the first call installs the subscriber.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("flipdash_core=info"));

        fmt().with_env_filter(filter).init();
    });
}
