//! Closing-statement calculation.

use rust_decimal::Decimal;

use super::types::{ClosingGroups, ClosingRole, ClosingStatement};
use crate::rollup::{GroupRecord, RollupTotals};

/// Flat tax rate applied to a positive capital gain (15%).
pub const CAPITAL_GAINS_TAX_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Closing service for the sale projection.
pub struct ClosingService;

impl ClosingService {
    /// Splits a record set into operating records and the reserved closing
    /// slots.
    ///
    /// The caller is responsible for group uniqueness
    /// (`RollupService::validate_unique_groups`); with a valid input every
    /// reserved role fills its slot at most once.
    #[must_use]
    pub fn partition(records: Vec<GroupRecord>) -> (Vec<GroupRecord>, ClosingGroups) {
        let mut operating = Vec::with_capacity(records.len());
        let mut closing = ClosingGroups::default();

        for record in records {
            match ClosingRole::from_group_id(record.group_id) {
                Some(role) => closing.set(role, record),
                None => operating.push(record),
            }
        }

        (operating, closing)
    }

    /// Computes the sale projection.
    ///
    /// The tax is the greater of the budgeted tax figure and the flat rate
    /// applied to the positive part of the gain; a loss never produces a
    /// negative tax. The ROI division is guarded so a property with no
    /// recorded investment reports a ratio of zero instead of faulting.
    #[must_use]
    pub fn compute_statement(
        operating: &RollupTotals,
        closing: &ClosingGroups,
    ) -> ClosingStatement {
        let total_investment = operating.estimated_total;
        let outstanding_financing = closing.estimated_total(ClosingRole::OutstandingFinancing);
        let property_cost = total_investment + outstanding_financing;

        let sale_price = closing.estimated_total(ClosingRole::SalePrice);
        let broker_fee = closing.estimated_total(ClosingRole::BrokerFee);

        let capital_gains_base = sale_price - property_cost - broker_fee;
        let computed_tax = if capital_gains_base > Decimal::ZERO {
            capital_gains_base * CAPITAL_GAINS_TAX_RATE
        } else {
            Decimal::ZERO
        };
        let capital_gains_tax = closing
            .estimated_total(ClosingRole::CapitalGainsTax)
            .max(computed_tax);

        let net_result = sale_price - property_cost - broker_fee - capital_gains_tax;

        let roi = if total_investment > Decimal::ZERO {
            net_result / total_investment
        } else {
            Decimal::ZERO
        };

        ClosingStatement {
            total_investment,
            outstanding_financing,
            property_cost,
            sale_price,
            broker_fee,
            capital_gains_tax,
            net_result,
            roi,
        }
    }
}
