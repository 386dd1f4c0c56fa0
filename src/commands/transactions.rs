// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{FixedOffset, Utc};
use serde::Serialize;

use crate::catalog::get_category_by_id;
use crate::commands::kind_arg;
use crate::config::Config;
use crate::error::Error;
use crate::filter::{group_by_day, TransactionFilter};
use crate::models::{Transaction, TransactionKind};
use crate::store::BudgetStore;
use crate::utils::{fmt_money, maybe_print_json, parse_datetime, parse_decimal, pretty_table};

pub fn handle(store: &BudgetStore, cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(store, cfg, sub)?,
        Some(("show", sub)) => show(store, cfg, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(store: &BudgetStore, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if sub.get_flag("by-day") && !json_flag && !jsonl_flag {
        return list_by_day(store, cfg, sub);
    }
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.kind.clone(),
                    r.description.clone(),
                    r.category.clone(),
                    fmt_money(&r.amount, &cfg.currency_symbol),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Type", "Description", "Category", "Amount"],
                rows,
            )
        );
    }
    Ok(())
}

/// Adds a transaction to the session, as the add-transaction screen does.
///
/// The category id is not checked against the catalog.
pub fn add(store: &mut BudgetStore, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let offset = *store.now().offset();
    let kind: TransactionKind = sub
        .get_one::<String>("type")
        .map(|s| s.as_str())
        .unwrap_or("expense")
        .parse()?;
    let amount = parse_decimal(required(sub, "amount")?)?;
    let description = required(sub, "description")?.to_string();
    let category = required(sub, "category")?.to_string();
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_datetime(d, offset).context("Invalid --date")?,
        None => Utc::now(),
    };
    let id = sub
        .get_one::<String>("id")
        .cloned()
        .unwrap_or_else(|| Utc::now().timestamp_millis().to_string());

    let tx = Transaction {
        id,
        kind,
        amount,
        description,
        category,
        date,
    };
    let local = tx.date.with_timezone(&offset);
    println!(
        "Recorded {} {} on {} for '{}' (id: {})",
        tx.kind,
        fmt_money(&tx.amount, &cfg.currency_symbol),
        local.format("%Y-%m-%d"),
        tx.description,
        tx.id
    );
    store.add(tx);
    crate::commands::summary::handle(store, cfg, sub)
}

fn required<'a>(sub: &'a clap::ArgMatches, name: &str) -> Result<&'a str> {
    sub.get_one::<String>(name)
        .map(|s| s.as_str())
        .with_context(|| format!("missing --{}", name))
}

fn list_by_day(store: &BudgetStore, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let filter = filter_from(sub, *store.now().offset())?;
    let mut matched = filter.apply(store.list());
    if let Some(limit) = sub.get_one::<usize>("limit") {
        matched.truncate(*limit);
    }
    let groups = group_by_day(matched, *store.now().offset());
    if groups.is_empty() {
        println!("No transactions found");
        return Ok(());
    }
    for g in groups {
        println!("{}", g.day.format("%A, %B %-d, %Y"));
        let rows: Vec<Vec<String>> = g
            .transactions
            .iter()
            .map(|t| {
                vec![
                    t.id.clone(),
                    t.description.clone(),
                    category_name(store, &t.category),
                    fmt_money(&t.amount, &cfg.currency_symbol),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Description", "Category", "Amount"], rows)
        );
    }
    Ok(())
}

fn show(store: &BudgetStore, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub
        .get_one::<String>("id")
        .ok_or_else(|| anyhow::anyhow!("missing transaction id"))?;
    let tx = store
        .get(id)
        .ok_or_else(|| Error::TransactionNotFound(id.clone()))?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), tx)? {
        let local = tx.date.with_timezone(store.now().offset());
        let rows = vec![
            vec!["ID".into(), tx.id.clone()],
            vec!["Type".into(), tx.kind.to_string()],
            vec!["Amount".into(), fmt_money(&tx.amount, &cfg.currency_symbol)],
            vec!["Description".into(), tx.description.clone()],
            vec!["Category".into(), category_name(store, &tx.category)],
            vec!["Date".into(), local.format("%B %-d, %Y").to_string()],
            vec!["Time".into(), local.format("%-I:%M %p").to_string()],
        ];
        println!("{}", pretty_table(&["Field", "Value"], rows));
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub category: String,
    pub amount: rust_decimal::Decimal,
}

fn filter_from(sub: &clap::ArgMatches, offset: FixedOffset) -> Result<TransactionFilter> {
    let bound = |name: &str| -> Result<_> {
        match sub.get_one::<String>(name) {
            Some(s) => Ok(Some(
                parse_datetime(s, offset).with_context(|| format!("Invalid --{}", name))?,
            )),
            None => Ok(None),
        }
    };
    Ok(TransactionFilter {
        search: sub.get_one::<String>("search").cloned(),
        category: sub.get_one::<String>("category").cloned(),
        kind: kind_arg(sub)?,
        since: bound("since")?,
        until: bound("until")?,
    })
}

/// Rows matching the `list` arguments, in store order.
pub fn query_rows(store: &BudgetStore, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let offset = *store.now().offset();
    let filter = filter_from(sub, offset)?;
    let mut data: Vec<TransactionRow> = filter
        .apply(store.list())
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id.clone(),
            date: t.date.with_timezone(&offset).format("%Y-%m-%d").to_string(),
            kind: t.kind.to_string(),
            description: t.description.clone(),
            category: t.category.clone(),
            amount: t.amount,
        })
        .collect();
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    Ok(data)
}

fn category_name(store: &BudgetStore, id: &str) -> String {
    get_category_by_id(store.catalog(), id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| id.to_string())
}
