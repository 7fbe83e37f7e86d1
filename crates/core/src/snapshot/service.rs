//! Snapshot service: builds the roll-up input for one property.

use std::collections::HashMap;

use flipdash_shared::{GroupId, PropertyId};
use rust_decimal::Decimal;

use super::error::SnapshotError;
use super::types::{BudgetAllocation, GroupInfo, Transaction, TransactionStatus};
use crate::rollup::GroupRecord;

/// Snapshot service for business logic.
pub struct SnapshotService;

impl SnapshotService {
    /// Folds the catalog, allocations, and transactions of one property
    /// into one `GroupRecord` per catalog group.
    ///
    /// Confirmed transaction amounts accumulate into the actual column,
    /// pending ones into the committed column. Groups with nothing booked
    /// still yield a zero-filled record. Inactive transactions are ignored,
    /// and transactions booked against a group missing from the catalog are
    /// skipped; both are counted in a debug log rather than failing the
    /// report.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::DuplicateAllocation` when two allocations
    /// target one group, and `SnapshotError::NegativeAmount` for a negative
    /// allocation or transaction amount.
    pub fn group_records(
        property: PropertyId,
        groups: &[GroupInfo],
        allocations: &[BudgetAllocation],
        transactions: &[Transaction],
    ) -> Result<Vec<GroupRecord>, SnapshotError> {
        let mut budgets: HashMap<GroupId, Decimal> = HashMap::new();

        for allocation in allocations {
            if allocation.property_id != property {
                continue;
            }
            if allocation.amount < Decimal::ZERO {
                return Err(SnapshotError::NegativeAmount {
                    group_id: allocation.group_id,
                    amount: allocation.amount,
                });
            }
            if budgets.insert(allocation.group_id, allocation.amount).is_some() {
                return Err(SnapshotError::DuplicateAllocation(allocation.group_id));
            }
        }

        let known: HashMap<GroupId, usize> = groups
            .iter()
            .enumerate()
            .map(|(index, group)| (group.id, index))
            .collect();

        let mut committed = vec![Decimal::ZERO; groups.len()];
        let mut actual = vec![Decimal::ZERO; groups.len()];
        let mut inactive_skipped = 0usize;
        let mut unmatched_skipped = 0usize;

        for transaction in transactions {
            if transaction.property_id != property {
                continue;
            }
            if !transaction.is_active {
                inactive_skipped += 1;
                continue;
            }
            let Some(&index) = known.get(&transaction.group_id) else {
                unmatched_skipped += 1;
                continue;
            };
            if transaction.amount < Decimal::ZERO {
                return Err(SnapshotError::NegativeAmount {
                    group_id: transaction.group_id,
                    amount: transaction.amount,
                });
            }
            match transaction.status {
                TransactionStatus::Pending => committed[index] += transaction.amount,
                TransactionStatus::Confirmed => actual[index] += transaction.amount,
            }
        }

        if inactive_skipped > 0 || unmatched_skipped > 0 {
            tracing::debug!(
                %property,
                inactive_skipped,
                unmatched_skipped,
                "skipped transactions while building group records"
            );
        }

        let records = groups
            .iter()
            .enumerate()
            .map(|(index, group)| {
                GroupRecord::new(
                    group.id,
                    group.label.clone(),
                    budgets.get(&group.id).copied().unwrap_or(Decimal::ZERO),
                    committed[index],
                    actual[index],
                )
            })
            .collect();

        Ok(records)
    }
}
