//! Tests for dashboard report assembly.

use chrono::NaiveDate;
use flipdash_shared::{GroupId, PropertyId, TransactionId};
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::service::DashboardService;
use crate::rollup::{GroupRecord, RollupError};
use crate::snapshot::{PropertyInfo, Transaction, TransactionStatus};

fn record(id: i32, budget: Decimal, actual: Decimal) -> GroupRecord {
    GroupRecord::new(GroupId::new(id), format!("Group {id}"), budget, dec!(0), actual)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn transaction(
    property: PropertyId,
    status: TransactionStatus,
    on: NaiveDate,
    amount: Decimal,
) -> Transaction {
    Transaction {
        id: TransactionId::new(),
        property_id: property,
        group_id: GroupId::new(1),
        status,
        date: on,
        description: None,
        amount,
        is_active: true,
    }
}

#[test]
fn test_financial_summary_end_to_end() {
    let records = vec![
        record(1, dec!(1000), dec!(800)),
        record(2, dec!(500), dec!(600)),
        record(6, dec!(200), dec!(0)),
        record(7, dec!(50), dec!(0)),
        record(8, dec!(2500), dec!(0)),
    ];

    let summary = DashboardService::financial_summary(records).unwrap();

    assert_eq!(summary.operating_lines.len(), 2);
    assert_eq!(summary.closing_lines.len(), 3);
    assert_eq!(summary.operating_totals.estimated_total, dec!(1600));
    assert_eq!(summary.operating_totals.balance_to_invest, dec!(200));

    assert_eq!(summary.closing.total_investment, dec!(1600));
    assert_eq!(summary.closing.property_cost, dec!(1800));
    assert_eq!(summary.closing.capital_gains_tax, dec!(97.5));
    assert_eq!(summary.closing.net_result, dec!(552.5));
    assert_eq!(summary.closing.roi, dec!(0.3453125));
}

#[test]
fn test_financial_summary_rejects_duplicate_group() {
    let records = vec![record(3, dec!(100), dec!(0)), record(3, dec!(200), dec!(0))];

    assert!(matches!(
        DashboardService::financial_summary(records),
        Err(RollupError::DuplicateGroup(id)) if id == GroupId::new(3)
    ));
}

#[test]
fn test_group_shares_sum_to_one_hundred() {
    let records = vec![
        record(1, dec!(0), dec!(750)),
        record(2, dec!(0), dec!(250)),
    ];

    let shares = DashboardService::group_shares(&records);

    assert_eq!(shares[0].percent, dec!(75.00));
    assert_eq!(shares[1].percent, dec!(25.00));
    let total: Decimal = shares.iter().map(|s| s.percent).sum();
    assert_eq!(total, dec!(100.00));
}

#[test]
fn test_group_shares_guard_empty_booking() {
    let records = vec![record(1, dec!(500), dec!(0))];

    let shares = DashboardService::group_shares(&records);

    // A budget alone books nothing; no division happens.
    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0].amount, Decimal::ZERO);
    assert_eq!(shares[0].percent, Decimal::ZERO);
}

#[test]
fn test_monthly_outflow_buckets_and_zero_fills() {
    let first = PropertyInfo {
        id: PropertyId::new(),
        name: "Maple St 12".to_string(),
    };
    let second = PropertyInfo {
        id: PropertyId::new(),
        name: "Oak Ave 3".to_string(),
    };

    let transactions = vec![
        transaction(first.id, TransactionStatus::Confirmed, date(2025, 3, 5), dec!(100)),
        transaction(first.id, TransactionStatus::Confirmed, date(2025, 1, 20), dec!(40)),
        transaction(second.id, TransactionStatus::Confirmed, date(2025, 1, 8), dec!(70)),
        // Pending and inactive rows never reach the chart.
        transaction(first.id, TransactionStatus::Pending, date(2025, 2, 1), dec!(999)),
    ];

    let chart = DashboardService::monthly_outflow(&[first.clone(), second.clone()], &transactions);

    assert_eq!(chart.labels, vec!["2025-01", "2025-03"]);
    assert_eq!(chart.series.len(), 2);
    assert_eq!(chart.series[0].name, "Maple St 12");
    assert_eq!(chart.series[0].totals, vec![dec!(40), dec!(100)]);
    assert_eq!(chart.series[1].totals, vec![dec!(70), dec!(0)]);
}

#[test]
fn test_monthly_outflow_skips_idle_properties() {
    let busy = PropertyInfo {
        id: PropertyId::new(),
        name: "Maple St 12".to_string(),
    };
    let idle = PropertyInfo {
        id: PropertyId::new(),
        name: "Empty Lot".to_string(),
    };
    let transactions = vec![transaction(
        busy.id,
        TransactionStatus::Confirmed,
        date(2025, 4, 2),
        dec!(10),
    )];

    let chart = DashboardService::monthly_outflow(&[busy, idle], &transactions);

    assert_eq!(chart.series.len(), 1);
}

#[test]
fn test_last_confirmed_activity_ignores_future_dates() {
    let property = PropertyId::new();
    let today = date(2025, 6, 1);
    let transactions = vec![
        transaction(property, TransactionStatus::Confirmed, date(2025, 5, 20), dec!(10)),
        transaction(property, TransactionStatus::Confirmed, date(2025, 7, 1), dec!(10)),
        transaction(property, TransactionStatus::Pending, date(2025, 5, 30), dec!(10)),
    ];

    assert_eq!(
        DashboardService::last_confirmed_activity(&transactions, today),
        Some(date(2025, 5, 20))
    );
    assert_eq!(DashboardService::last_confirmed_activity(&[], today), None);
}

#[test]
fn test_recent_confirmed_orders_newest_first() {
    let property = PropertyId::new();
    let today = date(2025, 6, 1);
    let transactions = vec![
        transaction(property, TransactionStatus::Confirmed, date(2025, 3, 1), dec!(1)),
        transaction(property, TransactionStatus::Confirmed, date(2025, 5, 1), dec!(2)),
        transaction(property, TransactionStatus::Confirmed, date(2025, 4, 1), dec!(3)),
    ];

    let recent = DashboardService::recent_confirmed(&transactions, today, 10);

    let dates: Vec<NaiveDate> = recent.iter().map(|t| t.date).collect();
    assert_eq!(dates, vec![date(2025, 5, 1), date(2025, 4, 1), date(2025, 3, 1)]);
}

#[rstest]
#[case(0, 1)]
#[case(3, 3)]
#[case(100, 50)]
fn test_recent_confirmed_clamps_limit(#[case] requested: usize, #[case] expected: usize) {
    let property = PropertyId::new();
    let today = date(2025, 12, 31);
    let transactions: Vec<Transaction> = (1..=60)
        .map(|day_offset| {
            transaction(
                property,
                TransactionStatus::Confirmed,
                date(2025, 1, 1) + chrono::Days::new(day_offset),
                dec!(1),
            )
        })
        .collect();

    let recent = DashboardService::recent_confirmed(&transactions, today, requested);

    assert_eq!(recent.len(), expected);
}
