// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::aggregate::{expense_breakdown, expense_slices, top_categories};
use crate::catalog::categories_for_kind;
use crate::commands::kind_arg;
use crate::config::Config;
use crate::models::{CatalogCategory, TransactionKind};
use crate::store::BudgetStore;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, pretty_table};

pub fn handle(store: &BudgetStore, cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("categories", sub)) => totals(store, cfg, sub)?,
        Some(("breakdown", sub)) => breakdown(store, cfg, sub)?,
        Some(("catalog", sub)) => catalog(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn totals(store: &BudgetStore, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let kind = kind_arg(sub)?;
    let data = match sub.get_one::<usize>("top") {
        Some(n) => top_categories(
            store.categories(),
            kind.unwrap_or(TransactionKind::Expense),
            *n,
        ),
        None => store
            .categories()
            .iter()
            .filter(|c| kind.is_none_or(|k| c.kind == k))
            .cloned()
            .collect(),
    };
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|c| {
                vec![
                    c.name.clone(),
                    c.kind.to_string(),
                    fmt_money(&c.amount, &cfg.currency_symbol),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Type", "Total"], rows));
    }
    Ok(())
}

fn breakdown(store: &BudgetStore, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let data = if sub.get_flag("slices") {
        expense_slices(store.list(), store.catalog())
    } else {
        expense_breakdown(store.categories())
    };
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        if data.is_empty() {
            println!("No expense data available");
            return Ok(());
        }
        let rows = data
            .iter()
            .map(|e| {
                vec![
                    e.name.clone(),
                    fmt_money(&e.amount, &cfg.currency_symbol),
                    fmt_percent(&e.share),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    }
    Ok(())
}

fn catalog(store: &BudgetStore, sub: &clap::ArgMatches) -> Result<()> {
    let data: Vec<&CatalogCategory> = match kind_arg(sub)? {
        Some(kind) => categories_for_kind(store.catalog(), kind),
        None => store.catalog().iter().collect(),
    };
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|c| vec![c.id.clone(), c.name.clone(), c.kind.to_string(), c.color.clone()])
            .collect();
        println!("{}", pretty_table(&["ID", "Name", "Type", "Color"], rows));
    }
    Ok(())
}
