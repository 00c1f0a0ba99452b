// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Currency;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Saldo", "saldo"));

pub fn default_db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().join("saldo.sqlite"))
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub seed_path: Option<PathBuf>,
    pub currency: Currency,
    pub assume_yes: bool,
}

impl Config {
    /// Global options; each already falls back to its `SALDO_*` variable.
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let db_path = match m.get_one::<String>("db") {
            Some(p) if !p.trim().is_empty() => PathBuf::from(p.trim()),
            _ => default_db_path()?,
        };
        let seed_path = m
            .get_one::<String>("seed")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        let currency = match m.get_one::<String>("currency") {
            Some(c) => c.parse::<Currency>()?,
            None => Currency::default(),
        };
        Ok(Self {
            db_path,
            seed_path,
            currency,
            assume_yes: m.get_flag("yes"),
        })
    }
}
