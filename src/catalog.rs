// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The predefined category catalog.

use once_cell::sync::Lazy;

use crate::models::{CatalogCategory, TransactionKind};

static PREDEFINED: Lazy<Vec<CatalogCategory>> = Lazy::new(|| {
    use TransactionKind::{Expense, Income};
    vec![
        CatalogCategory::new("salary", "Salary", Income, "#10B981"),
        CatalogCategory::new("freelance", "Freelance", Income, "#14B8A6"),
        CatalogCategory::new("investments", "Investments", Income, "#8B5CF6"),
        CatalogCategory::new("gifts", "Gifts", Income, "#3B82F6"),
        CatalogCategory::new("housing", "Housing", Expense, "#EC4899"),
        CatalogCategory::new("grocery", "Groceries", Expense, "#10B981"),
        CatalogCategory::new("transport", "Transport", Expense, "#3B82F6"),
        CatalogCategory::new("dining", "Dining Out", Expense, "#F97316"),
        CatalogCategory::new("entertainment", "Entertainment", Expense, "#F59E0B"),
        CatalogCategory::new("utilities", "Utilities", Expense, "#8B5CF6"),
        CatalogCategory::new("healthcare", "Healthcare", Expense, "#EF4444"),
        CatalogCategory::new("shopping", "Shopping", Expense, "#0EA5E9"),
        CatalogCategory::new("other", "Other", Expense, "#6B7280"),
    ]
});

/// Display token used for spending that matches no catalog entry.
pub const OTHER_COLOR: &str = "#6B7280";

pub fn predefined_categories() -> &'static [CatalogCategory] {
    &PREDEFINED
}

pub fn get_category_by_id<'a>(
    catalog: &'a [CatalogCategory],
    id: &str,
) -> Option<&'a CatalogCategory> {
    catalog.iter().find(|c| c.id == id)
}

/// Entries selectable when creating a transaction of the given kind.
pub fn categories_for_kind(
    catalog: &[CatalogCategory],
    kind: TransactionKind,
) -> Vec<&CatalogCategory> {
    catalog.iter().filter(|c| c.kind == kind).collect()
}
