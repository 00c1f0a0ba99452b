// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::App;
use crate::prompt::Prompt;
use crate::store::KvStore;
use anyhow::{Context, Result, bail};

/// Writes the full ledger in insertion order; search and sort do not apply.
pub fn handle<S: KvStore, P: Prompt>(app: &App<S, P>, m: &clap::ArgMatches) -> Result<()> {
    let fmt = m.get_one::<String>("format").unwrap().trim().to_lowercase();
    let out = m.get_one::<String>("out").unwrap().trim();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Create export file {}", out))?;
            wtr.write_record(["id", "date", "description", "amount", "type"])?;
            for t in app.transactions() {
                wtr.write_record([
                    t.id.to_string(),
                    t.date.clone(),
                    t.description.clone(),
                    t.amount.to_string(),
                    t.r#type.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(app.transactions())?)
                .with_context(|| format!("Write export file {}", out))?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported {} transactions to {}", app.transactions().len(), out);
    Ok(())
}
