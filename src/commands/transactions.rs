// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::App;
use crate::ledger::Removal;
use crate::models::{SortKey, TxKind};
use crate::prompt::Prompt;
use crate::store::KvStore;
use crate::utils::{maybe_print_json, parse_date, today};
use anyhow::Result;

pub fn handle<S: KvStore, P: Prompt>(app: &mut App<S, P>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(app, sub)?,
        Some(("list", sub)) => list(app, sub)?,
        Some(("rm", sub)) => rm(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn add<S: KvStore, P: Prompt>(app: &mut App<S, P>, sub: &clap::ArgMatches) -> Result<()> {
    let description = sub.get_one::<String>("description").unwrap().trim();
    let amount = sub.get_one::<String>("amount").unwrap();
    let date = match sub.get_one::<String>("date").map(|s| s.trim()) {
        Some(d) if !d.is_empty() => parse_date(d)?.to_string(),
        _ => today(),
    };
    let kind = sub.get_one::<String>("type").unwrap().parse::<TxKind>()?;

    if let Some(id) = app.add(description, amount, &date, kind)? {
        println!(
            "Recorded {} {} on {}: '{}' (id {})",
            kind, amount.trim(), date, description, id
        );
        app.surface().print_balance();
    }
    Ok(())
}

fn list<S: KvStore, P: Prompt>(app: &mut App<S, P>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if let Some(term) = sub.get_one::<String>("search") {
        app.set_search(term.trim());
    }
    if let Some(sort) = sub.get_one::<String>("sort") {
        app.set_sort(sort.parse::<SortKey>()?);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &app.surface().rows())? {
        app.surface().print_rows();
        app.surface().print_balance();
    }
    Ok(())
}

fn rm<S: KvStore, P: Prompt>(app: &mut App<S, P>, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    match app.remove(id)? {
        Removal::Removed => println!("Removed transaction {}", id),
        Removal::NotFound => println!("No transaction with id {}", id),
        Removal::Declined => println!("Kept transaction {}", id),
    }
    Ok(())
}
