// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod categories;
pub mod summary;
pub mod transactions;
pub mod trends;

use std::fs;

use anyhow::{Context, Result};

use crate::catalog::predefined_categories;
use crate::config::Config;
use crate::models::TransactionKind;
use crate::session::{parse_script, replay};
use crate::store::{BudgetStore, SystemClock};

/// Builds the session store and replays `--script` into it, if given.
pub fn open_session(cfg: &Config, m: &clap::ArgMatches) -> Result<BudgetStore> {
    let catalog = predefined_categories().to_vec();
    let mut store = if m.get_flag("empty") || cfg.start_empty {
        BudgetStore::new(catalog, Box::new(SystemClock))
    } else {
        BudgetStore::seeded(catalog, Box::new(SystemClock))
    };
    if let Some(path) = m.get_one::<String>("script") {
        let raw = fs::read_to_string(path).with_context(|| format!("Read script {}", path))?;
        let ops = parse_script(&raw).with_context(|| format!("Parse script {}", path))?;
        replay(&mut store, &ops);
    }
    Ok(store)
}

pub(crate) fn kind_arg(m: &clap::ArgMatches) -> Result<Option<TransactionKind>> {
    match m.get_one::<String>("type") {
        Some(s) => Ok(Some(s.parse()?)),
        None => Ok(None),
    }
}
