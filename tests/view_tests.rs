// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use saldo::models::{SortKey, Transaction, TxKind};
use saldo::view::{compute_balance, compute_view};

fn tx(id: i64, desc: &str, amount: &str, date: &str, kind: TxKind) -> Transaction {
    Transaction {
        id,
        description: desc.into(),
        amount: amount.parse().unwrap(),
        date: date.into(),
        r#type: kind,
    }
}

fn ids(v: &[Transaction]) -> Vec<i64> {
    v.iter().map(|t| t.id).collect()
}

#[test]
fn filter_is_case_insensitive_substring() {
    let list = vec![
        tx(1, "Café da manhã", "10", "2024-01-01", TxKind::Expense),
        tx(2, "Mercado", "50", "2024-01-02", TxKind::Expense),
        tx(3, "CAFÉ especial", "20", "2024-01-03", TxKind::Expense),
    ];
    assert_eq!(ids(&compute_view(&list, "café", SortKey::DateAsc)), vec![1, 3]);
    assert_eq!(ids(&compute_view(&list, "ERCA", SortKey::DateAsc)), vec![2]);
    assert_eq!(ids(&compute_view(&list, "", SortKey::DateAsc)), vec![1, 2, 3]);
    assert!(compute_view(&list, "aluguel", SortKey::DateAsc).is_empty());
}

#[test]
fn sort_by_date_and_amount() {
    let list = vec![
        tx(1, "Janeiro", "50", "2024-01-01", TxKind::Income),
        tx(2, "Junho", "10", "2024-06-01", TxKind::Income),
    ];
    assert_eq!(ids(&compute_view(&list, "", SortKey::DateDesc)), vec![2, 1]);
    assert_eq!(ids(&compute_view(&list, "", SortKey::DateAsc)), vec![1, 2]);
    assert_eq!(ids(&compute_view(&list, "", SortKey::AmountAsc)), vec![2, 1]);
    assert_eq!(ids(&compute_view(&list, "", SortKey::AmountDesc)), vec![1, 2]);
}

#[test]
fn ties_keep_ledger_order_in_both_directions() {
    let list = vec![
        tx(1, "a", "5", "2024-02-01", TxKind::Expense),
        tx(2, "b", "5", "2024-02-01", TxKind::Income),
        tx(3, "c", "9", "2024-03-01", TxKind::Expense),
        tx(4, "d", "5.00", "2024-02-01", TxKind::Expense),
    ];
    assert_eq!(ids(&compute_view(&list, "", SortKey::DateDesc)), vec![3, 1, 2, 4]);
    assert_eq!(ids(&compute_view(&list, "", SortKey::DateAsc)), vec![1, 2, 4, 3]);
    assert_eq!(ids(&compute_view(&list, "", SortKey::AmountDesc)), vec![3, 1, 2, 4]);
    assert_eq!(ids(&compute_view(&list, "", SortKey::AmountAsc)), vec![1, 2, 4, 3]);
}

#[test]
fn view_leaves_source_order_untouched() {
    let list = vec![
        tx(1, "x", "1", "2024-05-01", TxKind::Income),
        tx(2, "y", "2", "2024-01-01", TxKind::Income),
    ];
    let before = list.clone();
    let _ = compute_view(&list, "", SortKey::DateDesc);
    assert_eq!(list, before);
}

#[test]
fn balance_is_signed_sum() {
    assert_eq!(compute_balance(&[]), Decimal::ZERO);
    let list = vec![
        tx(1, "Salário", "2500.00", "2024-01-01", TxKind::Income),
        tx(2, "Aluguel", "1200.50", "2024-01-02", TxKind::Expense),
        tx(3, "Luz", "199.90", "2024-01-03", TxKind::Expense),
    ];
    assert_eq!(compute_balance(&list), "1099.60".parse::<Decimal>().unwrap());

    let mut overdrawn = list.clone();
    overdrawn.push(tx(4, "Viagem", "2000", "2024-01-04", TxKind::Expense));
    assert_eq!(compute_balance(&overdrawn), "-900.40".parse::<Decimal>().unwrap());
}
