//! Dashboard data types.

use flipdash_shared::{GroupId, PropertyId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::closing::ClosingStatement;
use crate::rollup::{RollupTotals, SummaryLine};

/// The full financial summary for one property.
///
/// Everything the summary screen renders in one value: the operating table
/// with its totals row, the closing detail table, and the sale projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// One line per operating group.
    pub operating_lines: Vec<SummaryLine>,
    /// Totals row of the operating table.
    pub operating_totals: RollupTotals,
    /// One line per present closing group, in display order.
    pub closing_lines: Vec<SummaryLine>,
    /// The sale projection.
    pub closing: ClosingStatement,
}

/// One group's slice of the per-group breakdown chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupShare {
    /// Group identifier.
    pub group_id: GroupId,
    /// Display name of the group.
    pub label: String,
    /// Disbursed-plus-committed amount for the group.
    pub amount: Decimal,
    /// Percentage of the overall amount, rounded to two decimals.
    pub percent: Decimal,
}

/// Monthly confirmed outflow for one property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySeries {
    /// Property identifier.
    pub property_id: PropertyId,
    /// Display name of the property.
    pub name: String,
    /// One total per chart label, zero-filled for quiet months.
    pub totals: Vec<Decimal>,
}

/// Stacked monthly outflow chart data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyOutflowChart {
    /// Month labels in `YYYY-MM` form, ascending.
    pub labels: Vec<String>,
    /// One series per property with confirmed activity.
    pub series: Vec<PropertySeries>,
}
