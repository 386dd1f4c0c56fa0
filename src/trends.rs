// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Income and expense totals bucketed over a recent time range.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, FixedOffset, Months, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::Error;
use crate::models::{Transaction, TransactionKind};

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Week,
    Month,
    Year,
}

impl FromStr for TimeRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "year" => Ok(TimeRange::Year),
            _ => Err(Error::InvalidTimeRange(s.to_string())),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub income: Decimal,
    pub expense: Decimal,
}

impl TrendPoint {
    fn collect<'a, I>(label: &str, txs: I) -> Self
    where
        I: Iterator<Item = &'a Transaction>,
    {
        let mut point = TrendPoint {
            label: label.to_string(),
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
        };
        for tx in txs {
            match tx.kind {
                TransactionKind::Income => point.income += tx.amount,
                TransactionKind::Expense => point.expense += tx.amount,
            }
        }
        point
    }
}

/// Buckets for `range`, oldest first.
///
/// - `Week`: one bucket per weekday over the last 7 days, ending with today.
/// - `Month`: four 7-day windows over the last 28 days.
/// - `Year`: the last 6 calendar months, matched by month within the last year.
pub fn trend(
    transactions: &[Transaction],
    now: DateTime<FixedOffset>,
    range: TimeRange,
) -> Vec<TrendPoint> {
    let cutoff = match range {
        TimeRange::Week => now - Duration::days(7),
        TimeRange::Month => now.checked_sub_months(Months::new(1)).unwrap_or(now),
        TimeRange::Year => now.checked_sub_months(Months::new(12)).unwrap_or(now),
    }
    .with_timezone(&Utc);
    let recent: Vec<&Transaction> = transactions.iter().filter(|t| t.date >= cutoff).collect();
    let offset = *now.offset();

    match range {
        TimeRange::Week => {
            let today = now.weekday().num_days_from_sunday() as usize;
            (0..7)
                .map(|i| {
                    let day = (today + 1 + i) % 7;
                    TrendPoint::collect(
                        DAY_NAMES[day],
                        recent.iter().copied().filter(|t| {
                            t.date.with_timezone(&offset).weekday().num_days_from_sunday()
                                as usize
                                == day
                        }),
                    )
                })
                .collect()
        }
        TimeRange::Month => (0..4)
            .map(|k| {
                let back = 3 - k;
                let start = (now - Duration::days(7 * (back + 1))).with_timezone(&Utc);
                let end = (now - Duration::days(7 * back)).with_timezone(&Utc);
                TrendPoint::collect(
                    &format!("Week {}", k + 1),
                    recent
                        .iter()
                        .copied()
                        .filter(|t| t.date >= start && t.date < end),
                )
            })
            .collect(),
        TimeRange::Year => {
            let this_month = now.month0() as usize;
            (0..6)
                .map(|i| {
                    let month = (this_month + 7 + i) % 12;
                    TrendPoint::collect(
                        MONTH_NAMES[month],
                        recent
                            .iter()
                            .copied()
                            .filter(|t| t.date.with_timezone(&offset).month0() as usize == month),
                    )
                })
                .collect()
        }
    }
}

/// Expense side of [`trend`] as `(label, amount)` pairs.
pub fn spending_trend(
    transactions: &[Transaction],
    now: DateTime<FixedOffset>,
    range: TimeRange,
) -> Vec<(String, Decimal)> {
    trend(transactions, now, range)
        .into_iter()
        .map(|p| (p.label, p.expense))
        .collect()
}
