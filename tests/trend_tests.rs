// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use pennywise::error::Error;
use pennywise::models::{Transaction, TransactionKind};
use pennywise::trends::{spending_trend, trend, TimeRange};
use rust_decimal::Decimal;

// A Wednesday.
fn now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2025, 8, 20, 10, 0, 0)
        .unwrap()
}

fn tx(kind: TransactionKind, amount: i64, y: i32, m: u32, d: u32) -> Transaction {
    Transaction {
        id: format!("{}-{}-{}", y, m, d),
        kind,
        amount: Decimal::from(amount),
        description: String::new(),
        category: "other".into(),
        date: Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap(),
    }
}

fn labels(points: &[pennywise::trends::TrendPoint]) -> Vec<&str> {
    points.iter().map(|p| p.label.as_str()).collect()
}

#[test]
fn week_buckets_end_with_today() {
    let txs = vec![
        tx(TransactionKind::Expense, 30, 2025, 8, 18),
        tx(TransactionKind::Income, 200, 2025, 8, 18),
        tx(TransactionKind::Expense, 99, 2025, 8, 10),
    ];
    let points = trend(&txs, now(), TimeRange::Week);
    assert_eq!(
        labels(&points),
        vec!["Thu", "Fri", "Sat", "Sun", "Mon", "Tue", "Wed"]
    );
    assert_eq!(points[4].expense, Decimal::from(30));
    assert_eq!(points[4].income, Decimal::from(200));
    let total: Decimal = points.iter().map(|p| p.expense).sum();
    assert_eq!(total, Decimal::from(30));
}

#[test]
fn month_buckets_are_oldest_first() {
    let txs = vec![
        tx(TransactionKind::Expense, 40, 2025, 8, 18),
        tx(TransactionKind::Expense, 15, 2025, 7, 25),
        tx(TransactionKind::Expense, 500, 2025, 6, 1),
    ];
    let points = trend(&txs, now(), TimeRange::Month);
    assert_eq!(labels(&points), vec!["Week 1", "Week 2", "Week 3", "Week 4"]);
    assert_eq!(points[0].expense, Decimal::from(15));
    assert_eq!(points[3].expense, Decimal::from(40));
    assert_eq!(points[1].expense + points[2].expense, Decimal::ZERO);
}

#[test]
fn year_buckets_cover_last_six_months() {
    let txs = vec![
        tx(TransactionKind::Expense, 70, 2025, 3, 15),
        tx(TransactionKind::Income, 900, 2025, 8, 1),
        tx(TransactionKind::Expense, 5, 2024, 6, 1),
    ];
    let points = trend(&txs, now(), TimeRange::Year);
    assert_eq!(
        labels(&points),
        vec!["Mar", "Apr", "May", "Jun", "Jul", "Aug"]
    );
    assert_eq!(points[0].expense, Decimal::from(70));
    assert_eq!(points[5].income, Decimal::from(900));
    assert_eq!(points[3].expense, Decimal::ZERO);
}

#[test]
fn year_buckets_match_month_of_year_within_the_last_year() {
    // Late August last year is inside the one-year window and lands in "Aug".
    let txs = vec![tx(TransactionKind::Expense, 12, 2024, 8, 25)];
    let points = trend(&txs, now(), TimeRange::Year);
    assert_eq!(points[5].expense, Decimal::from(12));
}

#[test]
fn spending_trend_keeps_only_expenses() {
    let txs = vec![
        tx(TransactionKind::Expense, 40, 2025, 8, 18),
        tx(TransactionKind::Income, 1000, 2025, 8, 18),
    ];
    let points = spending_trend(&txs, now(), TimeRange::Month);
    assert_eq!(points[3], ("Week 4".to_string(), Decimal::from(40)));
}

#[test]
fn parses_time_ranges() {
    assert_eq!("Week".parse::<TimeRange>(), Ok(TimeRange::Week));
    assert_eq!(" year ".parse::<TimeRange>(), Ok(TimeRange::Year));
    assert_eq!(
        "decade".parse::<TimeRange>(),
        Err(Error::InvalidTimeRange("decade".into()))
    );
}
