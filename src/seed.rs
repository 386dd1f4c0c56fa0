// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Sample transactions a fresh store starts with.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::models::{Transaction, TransactionKind};

// (id, kind, amount, description, category, day of month)
const SAMPLE: &[(&str, TransactionKind, i64, &str, &str, u32)] = &[
    ("1", TransactionKind::Income, 3500, "Monthly Salary", "salary", 1),
    ("2", TransactionKind::Expense, 850, "Rent Payment", "housing", 3),
    ("3", TransactionKind::Expense, 120, "Grocery Shopping", "grocery", 5),
    ("4", TransactionKind::Expense, 45, "Movie Tickets", "entertainment", 8),
    ("5", TransactionKind::Expense, 35, "Uber Ride", "transport", 10),
    ("6", TransactionKind::Expense, 78, "Electricity Bill", "utilities", 15),
    ("7", TransactionKind::Expense, 65, "Dinner at Restaurant", "dining", 18),
    ("8", TransactionKind::Income, 200, "Freelance Work", "freelance", 20),
];

/// Builds the sample dataset dated within the month of `now`, at local noon.
pub fn sample_transactions(now: DateTime<FixedOffset>) -> Vec<Transaction> {
    let offset = *now.offset();
    SAMPLE
        .iter()
        .filter_map(|&(id, kind, amount, description, category, day)| {
            let date = NaiveDate::from_ymd_opt(now.year(), now.month(), day)?
                .and_hms_opt(12, 0, 0)?;
            let local = offset.from_local_datetime(&date).single()?;
            Some(Transaction {
                id: id.to_string(),
                kind,
                amount: Decimal::from(amount),
                description: description.to_string(),
                category: category.to_string(),
                date: local.with_timezone(&Utc),
            })
        })
        .collect()
}
