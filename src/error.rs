// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

pub type LedgerResult<T> = Result<T, LedgerError>;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("Amount must be greater than zero (got {0})")]
    NonPositiveAmount(Decimal),

    #[error("Amount exceeds the {limit} ceiling (got {amount})")]
    AmountTooLarge { amount: Decimal, limit: Decimal },

    #[error("Store error: {0:#}")]
    Store(#[from] anyhow::Error),

    #[error("Snapshot encoding failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
