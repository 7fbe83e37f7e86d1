//! Folds raw budget and transaction rows into per-group records.

pub mod error;
pub mod service;
pub mod types;

pub use error::SnapshotError;
pub use service::SnapshotService;
pub use types::{BudgetAllocation, GroupInfo, PropertyInfo, Transaction, TransactionStatus};
