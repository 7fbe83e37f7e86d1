//! Dashboard report assembly.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{FinancialSummary, GroupShare, MonthlyOutflowChart, PropertySeries};
use crate::closing::ClosingService;
use crate::rollup::{GroupDerivation, GroupRecord, RollupError, RollupService, SummaryLine};
use crate::snapshot::{PropertyInfo, Transaction, TransactionStatus};

/// Upper bound on the recent-transactions listing.
const RECENT_LIMIT_MAX: usize = 50;

/// Dashboard service for report assembly.
pub struct DashboardService;

impl DashboardService {
    /// Builds the full financial summary for one property's record set.
    ///
    /// # Errors
    ///
    /// Returns `RollupError::DuplicateGroup` when a group appears more than
    /// once in the input; a duplicate would silently skew every total.
    pub fn financial_summary(
        records: Vec<GroupRecord>,
    ) -> Result<FinancialSummary, RollupError> {
        RollupService::validate_unique_groups(&records)?;

        let (operating, closing_groups) = ClosingService::partition(records);

        let operating_lines = RollupService::summary_lines(&operating);
        let operating_totals = RollupService::compute_totals(&operating);
        let closing_lines: Vec<SummaryLine> = closing_groups
            .records()
            .map(SummaryLine::for_record)
            .collect();
        let closing = ClosingService::compute_statement(&operating_totals, &closing_groups);

        Ok(FinancialSummary {
            operating_lines,
            operating_totals,
            closing_lines,
            closing,
        })
    }

    /// Builds the per-group breakdown of disbursed-plus-committed amounts.
    ///
    /// Percentages are shares of the summed absolute amounts, rounded to
    /// two decimals; when nothing is booked at all every share is zero.
    #[must_use]
    pub fn group_shares(records: &[GroupRecord]) -> Vec<GroupShare> {
        let amounts: Vec<Decimal> = records
            .iter()
            .map(|record| GroupDerivation::for_record(record).actual_plus_committed)
            .collect();
        let overall: Decimal = amounts.iter().map(|amount| amount.abs()).sum();

        records
            .iter()
            .zip(amounts)
            .map(|(record, amount)| {
                let percent = if overall.is_zero() {
                    Decimal::ZERO
                } else {
                    (amount.abs() / overall * Decimal::ONE_HUNDRED).round_dp(2)
                };
                GroupShare {
                    group_id: record.group_id,
                    label: record.label.clone(),
                    amount,
                    percent,
                }
            })
            .collect()
    }

    /// Buckets confirmed active transactions by calendar month, one series
    /// per property with activity.
    #[must_use]
    pub fn monthly_outflow(
        properties: &[PropertyInfo],
        transactions: &[Transaction],
    ) -> MonthlyOutflowChart {
        let confirmed: Vec<&Transaction> = transactions
            .iter()
            .filter(|t| t.is_active && t.status == TransactionStatus::Confirmed)
            .collect();

        // BTreeSet keeps the labels sorted; YYYY-MM sorts chronologically.
        let months: BTreeSet<String> = confirmed
            .iter()
            .map(|t| t.date.format("%Y-%m").to_string())
            .collect();
        let labels: Vec<String> = months.into_iter().collect();
        let index_of: BTreeMap<&str, usize> = labels
            .iter()
            .enumerate()
            .map(|(index, label)| (label.as_str(), index))
            .collect();

        let mut series = Vec::new();
        for property in properties {
            let mut totals = vec![Decimal::ZERO; labels.len()];
            let mut any = false;
            for transaction in &confirmed {
                if transaction.property_id != property.id {
                    continue;
                }
                let label = transaction.date.format("%Y-%m").to_string();
                if let Some(&index) = index_of.get(label.as_str()) {
                    totals[index] += transaction.amount;
                    any = true;
                }
            }
            if any {
                series.push(PropertySeries {
                    property_id: property.id,
                    name: property.name.clone(),
                    totals,
                });
            }
        }

        MonthlyOutflowChart { labels, series }
    }

    /// The most recent confirmed activity date not after `today`.
    #[must_use]
    pub fn last_confirmed_activity(
        transactions: &[Transaction],
        today: NaiveDate,
    ) -> Option<NaiveDate> {
        transactions
            .iter()
            .filter(|t| t.is_active && t.status == TransactionStatus::Confirmed)
            .map(|t| t.date)
            .filter(|date| *date <= today)
            .max()
    }

    /// The latest confirmed active transactions, newest first.
    ///
    /// `limit` is clamped to `1..=50`; ties on the date fall back to the
    /// time-ordered transaction id.
    #[must_use]
    pub fn recent_confirmed<'a>(
        transactions: &'a [Transaction],
        today: NaiveDate,
        limit: usize,
    ) -> Vec<&'a Transaction> {
        let limit = limit.clamp(1, RECENT_LIMIT_MAX);

        let mut recent: Vec<&Transaction> = transactions
            .iter()
            .filter(|t| t.is_active && t.status == TransactionStatus::Confirmed)
            .filter(|t| t.date <= today)
            .collect();
        recent.sort_by(|a, b| (b.date, b.id.into_inner()).cmp(&(a.date, a.id.into_inner())));
        recent.truncate(limit);

        recent
    }
}
