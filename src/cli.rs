// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn type_arg() -> Arg {
    Arg::new("type")
        .long("type")
        .value_parser(["income", "expense"])
        .help("Only income or only expense")
}

pub fn build_cli() -> Command {
    Command::new("pennywise")
        .version(crate_version!())
        .about("Session-local budget tracking: transactions, category totals and monthly summary")
        .arg(
            Arg::new("script")
                .long("script")
                .global(true)
                .value_name("FILE")
                .help("JSON file of add/delete/update/reset operations applied before the command"),
        )
        .arg(
            Arg::new("empty")
                .long("empty")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Start with an empty store instead of the sample data"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("FILE")
                .help("Config file to use instead of the platform default"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print JSON"),
        )
        .arg(
            Arg::new("jsonl")
                .long("jsonl")
                .global(true)
                .action(ArgAction::SetTrue)
                .conflicts_with("json")
                .help("Print one JSON object per line"),
        )
        .subcommand(
            Command::new("list")
                .about("List transactions, most recently added first")
                .arg(Arg::new("search").long("search").help("Description contains (case-insensitive)"))
                .arg(Arg::new("category").long("category").help("Category id"))
                .arg(type_arg())
                .arg(Arg::new("since").long("since").value_name("DATE").help("On or after this date"))
                .arg(Arg::new("until").long("until").value_name("DATE").help("Before this date"))
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("by-day")
                        .long("by-day")
                        .action(ArgAction::SetTrue)
                        .help("Group rows under their calendar day"),
                ),
        )
        .subcommand(
            Command::new("add")
                .about("Add a transaction to this session and print the month's summary")
                .arg(
                    Arg::new("type")
                        .long("type")
                        .default_value("expense")
                        .value_parser(["income", "expense"]),
                )
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(Arg::new("description").long("description").required(true))
                .arg(Arg::new("category").long("category").required(true).help("Category id"))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .value_name("DATE")
                        .help("YYYY-MM-DD or RFC 3339; defaults to now"),
                )
                .arg(Arg::new("id").long("id").help("Defaults to the current time in milliseconds")),
        )
        .subcommand(
            Command::new("show")
                .about("Show one transaction")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(
            Command::new("categories")
                .about("Totals per catalog category, across all time")
                .arg(type_arg())
                .arg(
                    Arg::new("top")
                        .long("top")
                        .value_parser(value_parser!(usize))
                        .help("Largest N categories of --type (expense if unset)"),
                ),
        )
        .subcommand(
            Command::new("breakdown")
                .about("Share of spending per expense category")
                .arg(
                    Arg::new("slices")
                        .long("slices")
                        .action(ArgAction::SetTrue)
                        .help("Group raw transactions, folding unknown categories into Other"),
                ),
        )
        .subcommand(Command::new("summary").about("Income, expenses and budget use for this month"))
        .subcommand(
            Command::new("trend")
                .about("Income and expense over a recent range")
                .arg(
                    Arg::new("range")
                        .long("range")
                        .default_value("month")
                        .value_parser(["week", "month", "year"]),
                ),
        )
        .subcommand(
            Command::new("catalog")
                .about("List selectable categories")
                .arg(type_arg()),
        )
}
