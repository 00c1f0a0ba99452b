// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::SortKey;
use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("saldo")
        .version(clap::crate_version!())
        .about("Personal income/expense ledger with a running balance")
        .arg(
            Arg::new("db")
                .long("db")
                .env("SALDO_DB")
                .global(true)
                .help("Path to the sqlite store"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .env("SALDO_SEED")
                .global(true)
                .help("JSON file of transactions used when nothing is stored yet"),
        )
        .arg(
            Arg::new("currency")
                .long("currency")
                .env("SALDO_CURRENCY")
                .global(true)
                .help("Display currency: BRL, USD or EUR"),
        )
        .arg(
            Arg::new("yes")
                .short('y')
                .long("yes")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Answer yes to confirmations"),
        )
        .subcommand(Command::new("init").about("Create the store"))
        .subcommand(
            Command::new("tx")
                .about("Record, list and delete transactions")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .allow_hyphen_values(true),
                        )
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD, defaults to today"))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .value_parser(["income", "expense"]),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(Arg::new("search").long("search"))
                        .arg(
                            Arg::new("sort")
                                .long("sort")
                                .value_parser(SortKey::ALL)
                                .default_value("date-desc"),
                        ),
                ))
                .subcommand(
                    Command::new("rm").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(json_flags(
            Command::new("balance").about("Show the running balance"),
        ))
        .subcommand(
            Command::new("theme")
                .about("Display theme")
                .subcommand(Command::new("toggle"))
                .subcommand(Command::new("show")),
        )
        .subcommand(
            Command::new("export")
                .about("Write the whole ledger to a file")
                .arg(Arg::new("format").long("format").required(true))
                .arg(Arg::new("out").long("out").required(true)),
        )
}
