// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }

    /// Signed contribution of `amount` to the balance.
    pub fn signed(&self, amount: Decimal) -> Decimal {
        match self {
            TxKind::Income => amount,
            TxKind::Expense => -amount,
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TxKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TxKind::Income),
            "expense" => Ok(TxKind::Expense),
            other => Err(anyhow::anyhow!(
                "Invalid type '{}', expected income|expense",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub description: String,
    pub amount: Decimal,
    #[serde(default, deserialize_with = "date_or_empty")]
    pub date: String, // YYYY-MM-DD
    pub r#type: TxKind,
}

// Absent and null dates load as "" and render as the invalid-date marker.
fn date_or_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Only an exact `"dark"` selects the dark theme; anything else is light.
    pub fn from_stored(value: Option<&str>) -> Theme {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    DateDesc,
    DateAsc,
    AmountDesc,
    AmountAsc,
}

impl SortKey {
    pub const ALL: [&'static str; 4] = ["date-desc", "date-asc", "amount-desc", "amount-asc"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::DateDesc => "date-desc",
            SortKey::DateAsc => "date-asc",
            SortKey::AmountDesc => "amount-desc",
            SortKey::AmountAsc => "amount-asc",
        }
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "date-desc" => Ok(SortKey::DateDesc),
            "date-asc" => Ok(SortKey::DateAsc),
            "amount-desc" => Ok(SortKey::AmountDesc),
            "amount-asc" => Ok(SortKey::AmountAsc),
            other => Err(anyhow::anyhow!(
                "Invalid sort '{}', expected one of {}",
                other,
                SortKey::ALL.join("|")
            )),
        }
    }
}

/// Display currency: symbol, grouping separator and decimal separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Currency {
    #[default]
    Brl,
    Usd,
    Eur,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Brl => "R$",
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }

    pub fn group_sep(&self) -> char {
        match self {
            Currency::Usd => ',',
            Currency::Brl | Currency::Eur => '.',
        }
    }

    pub fn decimal_sep(&self) -> char {
        match self {
            Currency::Usd => '.',
            Currency::Brl | Currency::Eur => ',',
        }
    }
}

impl FromStr for Currency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BRL" => Ok(Currency::Brl),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            other => Err(anyhow::anyhow!(
                "Unsupported currency '{}' (use BRL|USD|EUR)",
                other
            )),
        }
    }
}
