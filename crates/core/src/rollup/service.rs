//! Roll-up service for totals aggregation and input validation.

use std::collections::HashSet;

use super::derivation::GroupDerivation;
use super::error::RollupError;
use super::types::{GroupRecord, RollupTotals, SummaryLine};

/// Roll-up service for business logic.
pub struct RollupService;

impl RollupService {
    /// Sums a record set into a `RollupTotals`.
    ///
    /// The stored columns are summed directly. The derived columns are
    /// derived per record and then accumulated - never recomputed from the
    /// pre-summed stored columns, because the greater-of estimate does not
    /// distribute over addition: `sum(max(b_i, c_i)) != max(sum(b), sum(c))`
    /// in general.
    #[must_use]
    pub fn compute_totals(records: &[GroupRecord]) -> RollupTotals {
        let mut totals = RollupTotals::default();

        for record in records {
            Self::add_record(&mut totals, record);
        }

        totals
    }

    /// Builds the display lines for a record set, one per record.
    #[must_use]
    pub fn summary_lines(records: &[GroupRecord]) -> Vec<SummaryLine> {
        records.iter().map(SummaryLine::for_record).collect()
    }

    /// Validates that every group appears at most once in the input.
    ///
    /// # Errors
    ///
    /// Returns `RollupError::DuplicateGroup` for the first group seen twice.
    pub fn validate_unique_groups(records: &[GroupRecord]) -> Result<(), RollupError> {
        let mut seen = HashSet::new();

        for record in records {
            if !seen.insert(record.group_id) {
                return Err(RollupError::DuplicateGroup(record.group_id));
            }
        }

        Ok(())
    }

    fn add_record(totals: &mut RollupTotals, record: &GroupRecord) {
        let derived = GroupDerivation::for_record(record);

        totals.budget += record.budget;
        totals.actual_amount += record.actual_amount;
        totals.committed_amount += record.committed_amount;
        totals.actual_plus_committed += derived.actual_plus_committed;
        totals.estimated_total += derived.estimated_total;
        totals.balance_to_invest += derived.balance_to_invest;
    }
}
