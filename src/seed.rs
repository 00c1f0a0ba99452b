// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Supplies the starting ledger when nothing has been persisted yet.
pub trait SeedProvider {
    fn seed(&self) -> Option<Vec<Transaction>>;
}

pub struct NoSeed;

impl SeedProvider for NoSeed {
    fn seed(&self) -> Option<Vec<Transaction>> {
        None
    }
}

pub struct StaticSeed(pub Vec<Transaction>);

impl SeedProvider for StaticSeed {
    fn seed(&self) -> Option<Vec<Transaction>> {
        Some(self.0.clone())
    }
}

/// JSON array of transactions on disk, same shape as the persisted snapshot.
pub struct JsonFileSeed {
    pub path: PathBuf,
}

impl SeedProvider for JsonFileSeed {
    fn seed(&self) -> Option<Vec<Transaction>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "seed file unreadable");
                return None;
            }
        };
        match serde_json::from_str::<Vec<Transaction>>(&raw) {
            Ok(v) => Some(v),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "seed file is not a transaction array");
                None
            }
        }
    }
}
