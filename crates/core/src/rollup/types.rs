//! Roll-up data types.

use flipdash_shared::GroupId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::derivation::GroupDerivation;

/// One budget group row for a property.
///
/// The upstream CRUD layer is forgiving about numeric fields: absent or
/// `null` amounts deserialize as zero rather than failing the whole
/// computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    /// Budget group this row belongs to.
    pub group_id: GroupId,
    /// Display name of the group (opaque to the engine).
    pub label: String,
    /// Planned amount for the group.
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub budget: Decimal,
    /// Amount contractually committed but not yet paid.
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub committed_amount: Decimal,
    /// Amount actually disbursed or received.
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub actual_amount: Decimal,
}

impl GroupRecord {
    /// Creates a record for a group with the given amounts.
    #[must_use]
    pub fn new(
        group_id: GroupId,
        label: impl Into<String>,
        budget: Decimal,
        committed_amount: Decimal,
        actual_amount: Decimal,
    ) -> Self {
        Self {
            group_id,
            label: label.into(),
            budget,
            committed_amount,
            actual_amount,
        }
    }

    /// Creates an all-zero record for a group.
    #[must_use]
    pub fn zeroed(group_id: GroupId, label: impl Into<String>) -> Self {
        Self::new(
            group_id,
            label,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        )
    }
}

/// Sums across a record set.
///
/// Computed fresh on every roll-up call and never mutated in place;
/// recomputation is the only update path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollupTotals {
    /// Total planned amount.
    pub budget: Decimal,
    /// Total disbursed amount.
    pub actual_amount: Decimal,
    /// Total committed amount.
    pub committed_amount: Decimal,
    /// Sum of per-group disbursed-plus-committed amounts.
    pub actual_plus_committed: Decimal,
    /// Sum of per-group estimated totals.
    pub estimated_total: Decimal,
    /// Sum of per-group balances still to invest.
    pub balance_to_invest: Decimal,
}

/// A group record flattened together with its derived columns.
///
/// This is the dashboard's table row: the stored amounts plus the three
/// computed columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    /// Budget group this line belongs to.
    pub group_id: GroupId,
    /// Display name of the group.
    pub label: String,
    /// Planned amount.
    pub budget: Decimal,
    /// Disbursed amount.
    pub actual_amount: Decimal,
    /// Committed amount.
    pub committed_amount: Decimal,
    /// Disbursed plus committed.
    pub actual_plus_committed: Decimal,
    /// Remaining cash still required for this group.
    pub balance_to_invest: Decimal,
    /// Current best estimate of the group's final cost.
    pub estimated_total: Decimal,
}

impl SummaryLine {
    /// Builds the display line for one record.
    #[must_use]
    pub fn for_record(record: &GroupRecord) -> Self {
        let derived = GroupDerivation::for_record(record);
        Self {
            group_id: record.group_id,
            label: record.label.clone(),
            budget: record.budget,
            actual_amount: record.actual_amount,
            committed_amount: record.committed_amount,
            actual_plus_committed: derived.actual_plus_committed,
            balance_to_invest: derived.balance_to_invest,
            estimated_total: derived.estimated_total,
        }
    }
}

fn decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Decimal>::deserialize(deserializer)?;
    Ok(value.unwrap_or(Decimal::ZERO))
}
