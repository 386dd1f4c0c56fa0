// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::Serialize;

use crate::models::{Transaction, TransactionKind};

/// Criteria for narrowing the transaction list. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    /// Case-insensitive substring of the description.
    pub search: Option<String>,
    pub category: Option<String>,
    pub kind: Option<TransactionKind>,
    /// Inclusive lower bound on the date.
    pub since: Option<DateTime<Utc>>,
    /// Exclusive upper bound on the date.
    pub until: Option<DateTime<Utc>>,
}

impl TransactionFilter {
    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(q) = self.search.as_deref().filter(|q| !q.is_empty()) {
            if !tx.description.to_lowercase().contains(&q.to_lowercase()) {
                return false;
            }
        }
        if let Some(cat) = &self.category {
            if &tx.category != cat {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if tx.kind != kind {
                return false;
            }
        }
        if self.since.is_some_and(|since| tx.date < since) {
            return false;
        }
        if self.until.is_some_and(|until| tx.date >= until) {
            return false;
        }
        true
    }

    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|t| self.matches(t)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayGroup<'a> {
    pub day: NaiveDate,
    pub transactions: Vec<&'a Transaction>,
}

/// Buckets transactions by calendar day in `offset`, in order of first appearance.
pub fn group_by_day<'a, I>(transactions: I, offset: FixedOffset) -> Vec<DayGroup<'a>>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut groups: Vec<DayGroup<'a>> = Vec::new();
    for tx in transactions {
        let day = tx.date.with_timezone(&offset).date_naive();
        match groups.iter_mut().find(|g| g.day == day) {
            Some(g) => g.transactions.push(tx),
            None => groups.push(DayGroup {
                day,
                transactions: vec![tx],
            }),
        }
    }
    groups
}
