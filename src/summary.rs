// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Datelike, FixedOffset};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{MonthlySummary, Transaction, TransactionKind};

/// Spending ceiling reported with every monthly summary.
pub const MONTHLY_BUDGET: Decimal = Decimal::from_parts(3000, 0, 0, false, 0);

/// True when `tx` falls in the calendar month and year of `now`, judged in `now`'s offset.
pub fn in_month_of(tx: &Transaction, now: &DateTime<FixedOffset>) -> bool {
    let local = tx.date.with_timezone(now.offset());
    local.year() == now.year() && local.month() == now.month()
}

/// Income, expenses and what is left for the month containing `now`.
pub fn derive_monthly_summary(
    transactions: &[Transaction],
    now: DateTime<FixedOffset>,
) -> MonthlySummary {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for tx in transactions.iter().filter(|t| in_month_of(t, &now)) {
        match tx.kind {
            TransactionKind::Income => income += tx.amount,
            TransactionKind::Expense => expenses += tx.amount,
        }
    }
    MonthlySummary {
        income,
        expenses,
        remaining: income - expenses,
        budget: MONTHLY_BUDGET,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    OnTrack,
    Warning,
    OverBudget,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetUsage {
    pub spent: Decimal,
    pub budget: Decimal,
    /// `spent / budget`, capped at 1.
    pub ratio: Decimal,
    pub status: BudgetStatus,
}

impl MonthlySummary {
    pub fn is_overspent(&self) -> bool {
        self.remaining < Decimal::ZERO
    }

    pub fn budget_usage(&self) -> BudgetUsage {
        let ratio = self
            .expenses
            .checked_div(self.budget)
            .unwrap_or(Decimal::ONE)
            .min(Decimal::ONE);
        let status = if ratio < Decimal::new(5, 1) {
            BudgetStatus::OnTrack
        } else if ratio < Decimal::new(75, 2) {
            BudgetStatus::Warning
        } else {
            BudgetStatus::OverBudget
        };
        BudgetUsage {
            spent: self.expenses,
            budget: self.budget,
            ratio,
            status,
        }
    }
}
