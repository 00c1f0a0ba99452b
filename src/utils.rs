// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Currency, TxKind};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, Table};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

pub const INVALID_DATE: &str = "Invalid date";

static PLAIN_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+(\.\d+)?$").expect("static regex"));
// 1.234,56 | 1234,56 | 12,5
static GROUPED_AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d{1,3}(\.\d{3})+|\d+)(,\d+)?$").expect("static regex")
});

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Parses user-entered amounts. Dot-decimal input wins over grouped
/// comma-decimal input, so `1.500` is one and a half.
pub fn parse_amount(s: &str) -> LedgerResult<Decimal> {
    let t = s.trim();
    let normalized = if PLAIN_AMOUNT.is_match(t) {
        t.to_string()
    } else if GROUPED_AMOUNT.is_match(t) {
        t.replace('.', "").replace(',', ".")
    } else {
        return Err(LedgerError::InvalidAmount(t.to_string()));
    };
    normalized
        .parse::<Decimal>()
        .map_err(|_| LedgerError::InvalidAmount(t.to_string()))
}

/// `YYYY-MM-DD` -> `DD/MM/YYYY` by rearranging the parts; the calendar is
/// not checked, so `2024-02-30` renders as `30/02/2024`.
pub fn format_date(s: &str) -> String {
    let parts: Vec<&str> = s.trim().split('-').collect();
    match parts.as_slice() {
        [y, m, d] if !y.is_empty() && !m.is_empty() && !d.is_empty() => {
            format!("{}/{}/{}", d, m, y)
        }
        _ => INVALID_DATE.to_string(),
    }
}

pub fn format_currency(value: Decimal, ccy: Currency) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(ccy.group_sep());
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!(
        "{}{} {}{}{}",
        sign,
        ccy.symbol(),
        grouped,
        ccy.decimal_sep(),
        frac_part
    )
}

pub fn format_signed(amount: Decimal, kind: TxKind, ccy: Currency) -> String {
    let prefix = match kind {
        TxKind::Income => '+',
        TxKind::Expense => '-',
    };
    format!("{} {}", prefix, format_currency(amount, ccy))
}

pub fn today() -> String {
    chrono::Local::now().date_naive().to_string()
}

pub fn pretty_table(preset: &str, headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(preset);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
