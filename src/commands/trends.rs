// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::config::Config;
use crate::store::BudgetStore;
use crate::trends::{trend, TimeRange};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(store: &BudgetStore, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let range: TimeRange = sub
        .get_one::<String>("range")
        .map(|s| s.as_str())
        .unwrap_or("month")
        .parse()
        .context("Invalid --range")?;
    let data = trend(store.list(), store.now(), range);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|p| {
                vec![
                    p.label.clone(),
                    fmt_money(&p.income, &cfg.currency_symbol),
                    fmt_money(&p.expense, &cfg.currency_symbol),
                ]
            })
            .collect();
        let heading = format!("Last {}", range);
        println!(
            "{}",
            pretty_table(&[heading.as_str(), "Income", "Expense"], rows)
        );
    }
    Ok(())
}
