//! Per-group derivation of the computed estimate columns.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::GroupRecord;

/// The three derived columns for a single group record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDerivation {
    /// Disbursed plus committed amount.
    pub actual_plus_committed: Decimal,
    /// Greater of the budget and the disbursed-plus-committed amount.
    ///
    /// The estimate ratchets upward with real spending but never drops
    /// below the original budget.
    pub estimated_total: Decimal,
    /// Remaining cash still required to reach the estimated total.
    pub balance_to_invest: Decimal,
}

impl GroupDerivation {
    /// Derives the computed columns for one record.
    ///
    /// `balance_to_invest` cannot go negative: `estimated_total` is at
    /// least `actual_plus_committed`, which is at least `actual_amount`
    /// for non-negative inputs.
    #[must_use]
    pub fn for_record(record: &GroupRecord) -> Self {
        let actual_plus_committed = record.actual_amount + record.committed_amount;
        let estimated_total = record.budget.max(actual_plus_committed);
        let balance_to_invest = estimated_total - record.actual_amount;

        Self {
            actual_plus_committed,
            estimated_total,
            balance_to_invest,
        }
    }
}
