// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::App;
use crate::prompt::Prompt;
use crate::store::KvStore;
use anyhow::Result;

pub fn handle<S: KvStore, P: Prompt>(app: &mut App<S, P>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("toggle", _)) => {
            let theme = app.toggle_theme()?;
            println!("Theme set to {}", theme);
        }
        Some(("show", _)) => println!("{}", app.theme()),
        _ => {}
    }
    Ok(())
}
