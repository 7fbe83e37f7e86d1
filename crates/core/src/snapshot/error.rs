//! Snapshot error types.

use flipdash_shared::GroupId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Snapshot input errors.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Two budget allocations target the same group for one property.
    #[error("Duplicate budget allocation for group {0}")]
    DuplicateAllocation(GroupId),

    /// An allocation or transaction carries a negative amount.
    ///
    /// Amounts are non-negative by caller contract; the engine surfaces
    /// the violation instead of silently clamping it.
    #[error("Negative amount {amount} for group {group_id}")]
    NegativeAmount {
        /// Group the offending row targets.
        group_id: GroupId,
        /// The offending amount.
        amount: Decimal,
    },
}
