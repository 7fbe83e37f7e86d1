//! Sale-closing data types.

use flipdash_shared::GroupId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rollup::{GroupDerivation, GroupRecord};

/// Business role of a reserved closing group.
///
/// A handful of group ids are reserved for the sale projection; everything
/// else is an operating group. The id mapping lives only here so the rest
/// of the engine reads roles, not numeric literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosingRole {
    /// Financing still to be paid off at sale time.
    OutstandingFinancing,
    /// Sale broker commission.
    BrokerFee,
    /// Projected or agreed sale price.
    SalePrice,
    /// Budgeted capital-gains tax.
    CapitalGainsTax,
}

impl ClosingRole {
    /// All roles, in display order.
    pub const ALL: [Self; 4] = [
        Self::OutstandingFinancing,
        Self::BrokerFee,
        Self::SalePrice,
        Self::CapitalGainsTax,
    ];

    /// Maps a group id onto its closing role, if it has one.
    #[must_use]
    pub const fn from_group_id(id: GroupId) -> Option<Self> {
        match id.into_inner() {
            6 => Some(Self::OutstandingFinancing),
            7 => Some(Self::BrokerFee),
            8 => Some(Self::SalePrice),
            9 => Some(Self::CapitalGainsTax),
            _ => None,
        }
    }

    /// The reserved group id carrying this role.
    #[must_use]
    pub const fn group_id(self) -> GroupId {
        match self {
            Self::OutstandingFinancing => GroupId::new(6),
            Self::BrokerFee => GroupId::new(7),
            Self::SalePrice => GroupId::new(8),
            Self::CapitalGainsTax => GroupId::new(9),
        }
    }
}

/// The at-most-four reserved records of one computation input, by role.
///
/// An empty slot reads as an all-zero record everywhere, so a property
/// without, say, a sale-price row still produces a full statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosingGroups {
    /// Record for the outstanding-financing group, when present.
    pub outstanding_financing: Option<GroupRecord>,
    /// Record for the broker-fee group, when present.
    pub broker_fee: Option<GroupRecord>,
    /// Record for the sale-price group, when present.
    pub sale_price: Option<GroupRecord>,
    /// Record for the budgeted capital-gains-tax group, when present.
    pub capital_gains_tax: Option<GroupRecord>,
}

impl ClosingGroups {
    /// Returns the record filling a role, if any.
    #[must_use]
    pub const fn record(&self, role: ClosingRole) -> Option<&GroupRecord> {
        match role {
            ClosingRole::OutstandingFinancing => self.outstanding_financing.as_ref(),
            ClosingRole::BrokerFee => self.broker_fee.as_ref(),
            ClosingRole::SalePrice => self.sale_price.as_ref(),
            ClosingRole::CapitalGainsTax => self.capital_gains_tax.as_ref(),
        }
    }

    /// Fills a role's slot, replacing any previous record.
    pub fn set(&mut self, role: ClosingRole, record: GroupRecord) {
        let slot = match role {
            ClosingRole::OutstandingFinancing => &mut self.outstanding_financing,
            ClosingRole::BrokerFee => &mut self.broker_fee,
            ClosingRole::SalePrice => &mut self.sale_price,
            ClosingRole::CapitalGainsTax => &mut self.capital_gains_tax,
        };
        *slot = Some(record);
    }

    /// The estimated total of a role's record; zero for an empty slot.
    #[must_use]
    pub fn estimated_total(&self, role: ClosingRole) -> Decimal {
        self.record(role)
            .map(|record| GroupDerivation::for_record(record).estimated_total)
            .unwrap_or(Decimal::ZERO)
    }

    /// Iterates the present records in display order.
    pub fn records(&self) -> impl Iterator<Item = &GroupRecord> {
        ClosingRole::ALL
            .into_iter()
            .filter_map(|role| self.record(role))
    }
}

/// The sale projection derived from operating totals and closing groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosingStatement {
    /// Estimated total of all operating groups.
    pub total_investment: Decimal,
    /// Estimated financing still to be paid off.
    pub outstanding_financing: Decimal,
    /// Total investment plus outstanding financing.
    pub property_cost: Decimal,
    /// Estimated sale price.
    pub sale_price: Decimal,
    /// Estimated broker commission.
    pub broker_fee: Decimal,
    /// Greater of the budgeted tax figure and the flat rate applied to a
    /// positive gain.
    pub capital_gains_tax: Decimal,
    /// Sale price minus property cost, broker fee, and tax.
    pub net_result: Decimal,
    /// Net result over total investment, as a plain ratio.
    ///
    /// Percentage and locale formatting are presentation concerns.
    pub roi: Decimal,
}
