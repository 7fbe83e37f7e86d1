//! Snapshot input types.
//!
//! These are the rows the CRUD layer hands over: the group catalog, the
//! planned amounts, and the raw transactions. The engine folds them into
//! `GroupRecord`s; it never writes them back.

use chrono::NaiveDate;
use flipdash_shared::{GroupId, PropertyId, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One entry of the budget-group catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInfo {
    /// Group identifier.
    pub id: GroupId,
    /// Display name of the group.
    pub label: String,
}

/// A property known to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInfo {
    /// Property identifier.
    pub id: PropertyId,
    /// Display name of the property.
    pub name: String,
}

/// The planned amount for one (property, group) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    /// Property the allocation belongs to.
    pub property_id: PropertyId,
    /// Group the allocation covers.
    pub group_id: GroupId,
    /// Planned amount; absent or `null` reads as zero.
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub amount: Decimal,
}

/// Settlement state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Contractually committed, money not yet moved.
    Pending,
    /// Money disbursed or received.
    Confirmed,
}

/// One booked transaction for a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction identifier.
    pub id: TransactionId,
    /// Property the transaction belongs to.
    pub property_id: PropertyId,
    /// Group the transaction is booked against.
    pub group_id: GroupId,
    /// Settlement state.
    pub status: TransactionStatus,
    /// Booking date.
    pub date: NaiveDate,
    /// Free-form description.
    pub description: Option<String>,
    /// Transaction amount; absent or `null` reads as zero.
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub amount: Decimal,
    /// Soft-delete flag; inactive transactions never reach a report.
    pub is_active: bool,
}

fn decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Decimal>::deserialize(deserializer)?;
    Ok(value.unwrap_or(Decimal::ZERO))
}
