// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use pennywise::filter::{group_by_day, TransactionFilter};
use pennywise::models::{Transaction, TransactionKind};
use rust_decimal::Decimal;

fn tx(id: &str, kind: TransactionKind, desc: &str, category: &str, d: u32, h: u32) -> Transaction {
    Transaction {
        id: id.to_string(),
        kind,
        amount: Decimal::from(10),
        description: desc.to_string(),
        category: category.to_string(),
        date: Utc.with_ymd_and_hms(2025, 8, d, h, 0, 0).unwrap(),
    }
}

fn sample() -> Vec<Transaction> {
    vec![
        tx("4", TransactionKind::Expense, "Movie Tickets", "entertainment", 8, 19),
        tx("3", TransactionKind::Expense, "Grocery Shopping", "grocery", 5, 9),
        tx("2", TransactionKind::Expense, "Rent Payment", "housing", 5, 8),
        tx("1", TransactionKind::Income, "Monthly Salary", "salary", 1, 7),
    ]
}

fn ids(v: &[&Transaction]) -> Vec<String> {
    v.iter().map(|t| t.id.clone()).collect()
}

#[test]
fn empty_filter_keeps_everything_in_order() {
    let txs = sample();
    let out = TransactionFilter::default().apply(&txs);
    assert_eq!(ids(&out), vec!["4", "3", "2", "1"]);
}

#[test]
fn search_is_case_insensitive_substring() {
    let txs = sample();
    let f = TransactionFilter {
        search: Some("SHOP".into()),
        ..Default::default()
    };
    assert_eq!(ids(&f.apply(&txs)), vec!["3"]);
}

#[test]
fn criteria_combine() {
    let txs = sample();
    let f = TransactionFilter {
        search: Some("e".into()),
        kind: Some(TransactionKind::Expense),
        ..Default::default()
    };
    assert_eq!(ids(&f.apply(&txs)), vec!["4", "3", "2"]);

    let f = TransactionFilter {
        category: Some("housing".into()),
        kind: Some(TransactionKind::Income),
        ..Default::default()
    };
    assert!(f.apply(&txs).is_empty());
}

#[test]
fn date_bounds_are_half_open() {
    let txs = sample();
    let f = TransactionFilter {
        since: Some(Utc.with_ymd_and_hms(2025, 8, 5, 9, 0, 0).unwrap()),
        until: Some(Utc.with_ymd_and_hms(2025, 8, 8, 19, 0, 0).unwrap()),
        ..Default::default()
    };
    assert_eq!(ids(&f.apply(&txs)), vec!["3"]);
}

#[test]
fn groups_by_day_in_first_seen_order() {
    let txs = sample();
    let groups = group_by_day(&txs, FixedOffset::east_opt(0).unwrap());
    let days: Vec<NaiveDate> = groups.iter().map(|g| g.day).collect();
    assert_eq!(
        days,
        vec![
            NaiveDate::from_ymd_opt(2025, 8, 8).unwrap(),
            NaiveDate::from_ymd_opt(2025, 8, 5).unwrap(),
            NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
        ]
    );
    assert_eq!(ids(&groups[1].transactions), vec!["3", "2"]);
}

#[test]
fn grouping_respects_offset() {
    let txs = sample();
    // 19:00 UTC on the 8th is the 9th at UTC+6.
    let groups = group_by_day(&txs[..1], FixedOffset::east_opt(6 * 3600).unwrap());
    assert_eq!(groups[0].day, NaiveDate::from_ymd_opt(2025, 8, 9).unwrap());
}
