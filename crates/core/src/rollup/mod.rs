//! Per-group estimate derivation and totals aggregation.

pub mod derivation;
pub mod error;
pub mod service;
pub mod types;


pub use derivation::GroupDerivation;
pub use error::RollupError;
pub use service::RollupService;
pub use types::{GroupRecord, RollupTotals, SummaryLine};
