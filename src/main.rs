// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use pennywise::{cli, commands, config::Config};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let cfg = Config::load(matches.get_one::<String>("config").map(Path::new))?;
    let filter = EnvFilter::try_from_env("PENNYWISE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut store = commands::open_session(&cfg, &matches)?;

    match matches.subcommand() {
        Some(("list", _)) | Some(("show", _)) => {
            commands::transactions::handle(&store, &cfg, &matches)?
        }
        Some(("add", sub)) => commands::transactions::add(&mut store, &cfg, sub)?,
        Some(("categories", _)) | Some(("breakdown", _)) | Some(("catalog", _)) => {
            commands::categories::handle(&store, &cfg, &matches)?
        }
        Some(("summary", sub)) => commands::summary::handle(&store, &cfg, sub)?,
        Some(("trend", sub)) => commands::trends::handle(&store, &cfg, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
