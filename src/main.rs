// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use saldo::config::Config;
use saldo::ledger::LedgerViewModel;
use saldo::prompt::TerminalPrompt;
use saldo::seed::{JsonFileSeed, NoSeed, SeedProvider};
use saldo::store::SqliteStore;
use saldo::surface::TerminalSurface;
use saldo::{cli, commands};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "saldo=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = cli::build_cli().get_matches();
    let config = Config::from_matches(&matches)?;
    let store = SqliteStore::open(&config.db_path)?;

    if let Some(("init", _)) = matches.subcommand() {
        println!("Store initialized at {}", config.db_path.display());
        return Ok(());
    }

    let seed: Box<dyn SeedProvider> = match &config.seed_path {
        Some(path) => Box::new(JsonFileSeed { path: path.clone() }),
        None => Box::new(NoSeed),
    };
    let mut app = LedgerViewModel::init(
        store,
        seed.as_ref(),
        TerminalPrompt::new(config.assume_yes),
        TerminalSurface::new(),
        config.currency,
    );

    match matches.subcommand() {
        Some(("tx", sub)) => commands::transactions::handle(&mut app, sub)?,
        Some(("balance", sub)) => commands::balance::handle(&app, sub)?,
        Some(("theme", sub)) => commands::theme::handle(&mut app, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&app, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
