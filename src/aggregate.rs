// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Per-category totals and the spending breakdowns built on them.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::{get_category_by_id, OTHER_COLOR};
use crate::models::{CatalogCategory, CategoryTotal, Transaction, TransactionKind};

/// Totals every catalog entry over the whole transaction list, in catalog order.
///
/// Transactions whose category is not in the catalog are dropped. Every
/// entry is reported, with zero when nothing was filed under it.
pub fn derive_categories(
    transactions: &[Transaction],
    catalog: &[CatalogCategory],
) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = catalog.iter().map(CategoryTotal::zeroed).collect();
    // First occurrence wins if the catalog repeats an id.
    let mut index: HashMap<&str, usize> = HashMap::new();
    for (i, c) in catalog.iter().enumerate() {
        index.entry(c.id.as_str()).or_insert(i);
    }
    for tx in transactions {
        if let Some(&i) = index.get(tx.category.as_str()) {
            totals[i].amount += tx.amount;
        }
    }
    totals
}

/// Entries of one kind, largest first, at most `limit` of them.
pub fn top_categories(
    categories: &[CategoryTotal],
    kind: TransactionKind,
    limit: usize,
) -> Vec<CategoryTotal> {
    let mut out: Vec<CategoryTotal> = categories
        .iter()
        .filter(|c| c.kind == kind)
        .cloned()
        .collect();
    out.sort_by(|a, b| b.amount.cmp(&a.amount));
    out.truncate(limit);
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownEntry {
    pub id: String,
    pub name: String,
    pub color: String,
    pub amount: Decimal,
    /// Fraction of total expense, in `[0, 1]` for non-negative amounts.
    pub share: Decimal,
}

/// Expense categories that saw any spending, largest first, with their share.
pub fn expense_breakdown(categories: &[CategoryTotal]) -> Vec<BreakdownEntry> {
    let mut spent: Vec<&CategoryTotal> = categories
        .iter()
        .filter(|c| c.kind == TransactionKind::Expense && c.amount > Decimal::ZERO)
        .collect();
    spent.sort_by(|a, b| b.amount.cmp(&a.amount));
    let total: Decimal = spent.iter().map(|c| c.amount).sum();
    spent
        .into_iter()
        .map(|c| BreakdownEntry {
            id: c.id.clone(),
            name: c.name.clone(),
            color: c.color.clone(),
            amount: c.amount,
            share: share_of(c.amount, total),
        })
        .collect()
}

/// Expense transactions grouped straight from the list, for the spending chart.
///
/// Unlike [`derive_categories`], ids missing from the catalog are kept and
/// folded into a single "Other" slice.
pub fn expense_slices(
    transactions: &[Transaction],
    catalog: &[CatalogCategory],
) -> Vec<BreakdownEntry> {
    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, Decimal> = HashMap::new();
    for tx in transactions.iter().filter(|t| t.kind == TransactionKind::Expense) {
        let key = match get_category_by_id(catalog, &tx.category) {
            Some(c) => c.id.clone(),
            None => String::new(),
        };
        if !sums.contains_key(&key) {
            order.push(key.clone());
        }
        *sums.entry(key).or_insert(Decimal::ZERO) += tx.amount;
    }

    let mut slices: Vec<BreakdownEntry> = order
        .into_iter()
        .filter_map(|key| {
            let amount = sums.get(&key).copied().unwrap_or_default();
            if amount <= Decimal::ZERO {
                return None;
            }
            let (name, color) = match get_category_by_id(catalog, &key) {
                Some(c) => (c.name.clone(), c.color.clone()),
                None => ("Other".to_string(), OTHER_COLOR.to_string()),
            };
            Some(BreakdownEntry {
                id: key,
                name,
                color,
                amount,
                share: Decimal::ZERO,
            })
        })
        .collect();
    slices.sort_by(|a, b| b.amount.cmp(&a.amount));
    let total: Decimal = slices.iter().map(|s| s.amount).sum();
    for s in &mut slices {
        s.share = share_of(s.amount, total);
    }
    slices
}

fn share_of(amount: Decimal, total: Decimal) -> Decimal {
    amount.checked_div(total).unwrap_or(Decimal::ZERO)
}
