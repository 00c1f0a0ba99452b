// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure derivations from the ledger: the filtered/sorted view, the balance,
//! and the display rows built from them.

use crate::models::{Currency, SortKey, Transaction, TxKind};
use crate::utils::{format_currency, format_date, format_signed};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Filters by case-insensitive description substring, then sorts stably.
///
/// Dates that do not parse as `YYYY-MM-DD` order before every valid date.
pub fn compute_view(transactions: &[Transaction], search: &str, sort: SortKey) -> Vec<Transaction> {
    let needle = search.to_lowercase();
    let mut out: Vec<Transaction> = transactions
        .iter()
        .filter(|t| needle.is_empty() || t.description.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    let date_of = |t: &Transaction| NaiveDate::parse_from_str(&t.date, "%Y-%m-%d").ok();
    match sort {
        SortKey::DateDesc => out.sort_by(|a, b| date_of(b).cmp(&date_of(a))),
        SortKey::DateAsc => out.sort_by(|a, b| date_of(a).cmp(&date_of(b))),
        SortKey::AmountDesc => out.sort_by(|a, b| b.amount.cmp(&a.amount)),
        SortKey::AmountAsc => out.sort_by(|a, b| a.amount.cmp(&b.amount)),
    }
    out
}

/// Saturates at `Decimal::MAX`/`Decimal::MIN` instead of overflowing.
pub fn compute_balance(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.r#type.signed(t.amount)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BalanceSign {
    NonNegative,
    Negative,
}

impl BalanceSign {
    pub fn of(total: Decimal) -> Self {
        if total >= Decimal::ZERO {
            BalanceSign::NonNegative
        } else {
            BalanceSign::Negative
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewRow {
    pub id: i64,
    pub description: String,
    pub date: String,
    pub amount: String,
    pub r#type: TxKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceView {
    pub total: Decimal,
    pub formatted: String,
    pub sign: BalanceSign,
}

pub fn render_rows(view: &[Transaction], ccy: Currency) -> Vec<ViewRow> {
    view.iter()
        .map(|t| ViewRow {
            id: t.id,
            description: t.description.clone(),
            date: format_date(&t.date),
            amount: format_signed(t.amount, t.r#type, ccy),
            r#type: t.r#type,
        })
        .collect()
}

pub fn render_balance(total: Decimal, ccy: Currency) -> BalanceView {
    BalanceView {
        total,
        formatted: format_currency(total, ccy),
        sign: BalanceSign::of(total),
    }
}
