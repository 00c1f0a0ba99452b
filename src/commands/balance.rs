// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::App;
use crate::prompt::Prompt;
use crate::store::KvStore;
use crate::utils::maybe_print_json;
use anyhow::Result;

pub fn handle<S: KvStore, P: Prompt>(app: &App<S, P>, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    if let Some(b) = app.surface().balance() {
        if maybe_print_json(json_flag, jsonl_flag, b)? {
            return Ok(());
        }
    }
    app.surface().print_balance();
    Ok(())
}
