// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(Error::InvalidKind(s.to_string())),
        }
    }
}

/// A single income or expense event.
///
/// `category` is a catalog id but is never checked against the catalog;
/// an unknown id simply contributes to no category total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub description: String,
    pub category: String,
    pub date: DateTime<Utc>,
}

/// Partial fields merged into an existing transaction by `update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionPatch {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<TransactionKind>,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl TransactionPatch {
    pub fn amount(amount: Decimal) -> Self {
        TransactionPatch {
            amount: Some(amount),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == TransactionPatch::default()
    }

    /// Overwrites every field of `tx` that is set in the patch.
    pub fn apply_to(&self, tx: &mut Transaction) {
        if let Some(id) = &self.id {
            tx.id = id.clone();
        }
        if let Some(kind) = self.kind {
            tx.kind = kind;
        }
        if let Some(amount) = self.amount {
            tx.amount = amount;
        }
        if let Some(description) = &self.description {
            tx.description = description.clone();
        }
        if let Some(category) = &self.category {
            tx.category = category.clone();
        }
        if let Some(date) = self.date {
            tx.date = date;
        }
    }
}

/// A static catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCategory {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub color: String,
}

impl CatalogCategory {
    pub fn new(id: &str, name: &str, kind: TransactionKind, color: &str) -> Self {
        CatalogCategory {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            color: color.to_string(),
        }
    }
}

/// A catalog entry together with the total of every transaction filed under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub color: String,
    pub amount: Decimal,
}

impl CategoryTotal {
    pub fn zeroed(entry: &CatalogCategory) -> Self {
        CategoryTotal {
            id: entry.id.clone(),
            name: entry.name.clone(),
            kind: entry.kind,
            color: entry.color.clone(),
            amount: Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub income: Decimal,
    pub expenses: Decimal,
    /// `income - expenses`; negative when the month is overspent.
    pub remaining: Decimal,
    pub budget: Decimal,
}
