// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::config::Config;
use crate::models::MonthlySummary;
use crate::store::BudgetStore;
use crate::summary::{BudgetStatus, BudgetUsage};
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, pretty_table};

#[derive(Serialize)]
struct SummaryReport {
    month: String,
    #[serde(flatten)]
    summary: MonthlySummary,
    usage: BudgetUsage,
}

pub fn handle(store: &BudgetStore, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let summary = store.monthly_summary();
    let report = SummaryReport {
        month: store.now().format("%Y-%m").to_string(),
        summary,
        usage: summary.budget_usage(),
    };
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        return Ok(());
    }

    let sym = &cfg.currency_symbol;
    let status = match report.usage.status {
        BudgetStatus::OnTrack => "on track",
        BudgetStatus::Warning => "warning",
        BudgetStatus::OverBudget => "over budget",
    };
    let rows = vec![
        vec!["Income".into(), fmt_money(&summary.income, sym)],
        vec!["Expenses".into(), fmt_money(&summary.expenses, sym)],
        vec!["Remaining".into(), fmt_money(&summary.remaining, sym)],
        vec!["Budget".into(), fmt_money(&summary.budget, sym)],
        vec![
            "Budget used".into(),
            format!("{} ({})", fmt_percent(&report.usage.ratio), status),
        ],
    ];
    println!("{}", pretty_table(&[report.month.as_str(), "Amount"], rows));
    if summary.is_overspent() {
        println!("Spending exceeds income this month");
    }
    Ok(())
}
