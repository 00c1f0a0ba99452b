// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use saldo::commands::{App, exporter, theme, transactions};
use saldo::config::Config;
use saldo::ledger::LedgerViewModel;
use saldo::models::{Currency, Theme};
use saldo::prompt::ScriptedPrompt;
use saldo::seed::NoSeed;
use saldo::store::MemoryStore;
use saldo::surface::TerminalSurface;
use saldo::{cli, utils};
use serde_json::json;
use tempfile::tempdir;

fn app(store: &MemoryStore) -> App<&MemoryStore, ScriptedPrompt> {
    LedgerViewModel::init(
        store,
        &NoSeed,
        ScriptedPrompt::answering(true),
        TerminalSurface::new(),
        Currency::Brl,
    )
}

fn run_tx(app: &mut App<&MemoryStore, ScriptedPrompt>, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["saldo", "tx"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        transactions::handle(app, tx_m)
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn tx_add_records_and_defaults_date_to_today() {
    let store = MemoryStore::new();
    let mut app = app(&store);
    run_tx(
        &mut app,
        &["add", "--description", " Padaria ", "--amount", "7,90", "--type", "expense"],
    )
    .unwrap();
    assert_eq!(app.transactions().len(), 1);
    let t = &app.transactions()[0];
    assert_eq!(t.description, "Padaria");
    assert_eq!(t.date, utils::today());
    assert_eq!(t.amount.to_string(), "7.90");
}

#[test]
fn tx_add_negative_amount_is_notified_not_failed() {
    let store = MemoryStore::new();
    let mut app = app(&store);
    run_tx(
        &mut app,
        &[
            "add", "--description", "Estorno", "--amount", "-20", "--date", "2024-05-01",
            "--type", "income",
        ],
    )
    .unwrap();
    assert!(app.transactions().is_empty());
    assert_eq!(app.prompt().notices.len(), 1);
}

#[test]
fn tx_add_rejects_malformed_date() {
    let store = MemoryStore::new();
    let mut app = app(&store);
    let err = run_tx(
        &mut app,
        &[
            "add", "--description", "x", "--amount", "1", "--date", "05/01/2024", "--type",
            "income",
        ],
    )
    .unwrap_err();
    assert!(err.to_string().contains("expected YYYY-MM-DD"));
    assert!(app.transactions().is_empty());
}

#[test]
fn tx_list_applies_search_and_sort() {
    let store = MemoryStore::new();
    let mut app = app(&store);
    for (d, a, date) in [
        ("Mercado", "120", "2024-01-10"),
        ("Mercadinho", "15", "2024-02-01"),
        ("Cinema", "40", "2024-01-20"),
    ] {
        run_tx(
            &mut app,
            &["add", "--description", d, "--amount", a, "--date", date, "--type", "expense"],
        )
        .unwrap();
    }
    run_tx(&mut app, &["list", "--search", "mERC", "--sort", "amount-asc", "--json"]).unwrap();
    let rows = app.surface().rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].description, "Mercadinho");
    assert_eq!(rows[1].amount, "- R$ 120,00");
}

#[test]
fn tx_list_rejects_unknown_sort() {
    let res = cli::build_cli().try_get_matches_from(["saldo", "tx", "list", "--sort", "newest"]);
    assert!(res.is_err());
}

#[test]
fn tx_rm_deletes_by_id() {
    let store = MemoryStore::new();
    let mut app = app(&store);
    let id = app
        .add("Uber", "23", "2024-03-03", saldo::models::TxKind::Expense)
        .unwrap()
        .unwrap();
    let id_s = id.to_string();
    run_tx(&mut app, &["rm", "--id", &id_s]).unwrap();
    assert!(app.transactions().is_empty());
    assert_eq!(app.prompt().confirms.len(), 1);
}

#[test]
fn theme_toggle_command_flips_theme() {
    let store = MemoryStore::new();
    let mut app = app(&store);
    let matches = cli::build_cli().get_matches_from(["saldo", "theme", "toggle"]);
    if let Some(("theme", theme_m)) = matches.subcommand() {
        theme::handle(&mut app, theme_m).unwrap();
    } else {
        panic!("no theme subcommand");
    }
    assert_eq!(app.theme(), Theme::Dark);
    assert_eq!(app.surface().theme(), Theme::Dark);
}

#[test]
fn export_json_keeps_insertion_order() {
    let store = MemoryStore::new();
    let mut app = app(&store);
    let second = {
        app.add("Depois", "2", "2024-06-01", saldo::models::TxKind::Income)
            .unwrap();
        app.add("Antes", "1", "2024-01-01", saldo::models::TxKind::Expense)
            .unwrap()
            .unwrap()
    };

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();
    let matches =
        cli::build_cli().get_matches_from(["saldo", "export", "--format", "json", "--out", &out_str]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&app, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(parsed[0]["description"], json!("Depois"));
    assert_eq!(
        parsed[1],
        json!({
            "id": second,
            "description": "Antes",
            "amount": "1",
            "date": "2024-01-01",
            "type": "expense"
        })
    );
}

#[test]
fn export_csv_writes_header_and_rows() {
    let store = MemoryStore::new();
    let mut app = app(&store);
    app.add("Feira, sábado", "45.5", "2024-01-06", saldo::models::TxKind::Expense)
        .unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();
    let matches =
        cli::build_cli().get_matches_from(["saldo", "export", "--format", "CSV", "--out", &out_str]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&app, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["id", "date", "description", "amount", "type"]
    );
    let rec = rdr.records().next().unwrap().unwrap();
    assert_eq!(&rec[2], "Feira, sábado");
    assert_eq!(&rec[3], "45.5");
    assert_eq!(&rec[4], "expense");
}

#[test]
fn export_rejects_unknown_format() {
    let store = MemoryStore::new();
    let app = app(&store);
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.xml");
    let out_str = out_path.to_string_lossy().to_string();
    let matches =
        cli::build_cli().get_matches_from(["saldo", "export", "--format", "xml", "--out", &out_str]);
    if let Some(("export", export_m)) = matches.subcommand() {
        assert!(exporter::handle(&app, export_m).is_err());
    } else {
        panic!("no export subcommand");
    }
    assert!(!out_path.exists());
}

#[test]
fn config_reads_global_options() {
    let matches = cli::build_cli().get_matches_from([
        "saldo",
        "tx",
        "list",
        "--db",
        "/tmp/saldo-test.sqlite",
        "--currency",
        "usd",
        "-y",
    ]);
    let cfg = Config::from_matches(&matches).unwrap();
    assert_eq!(cfg.db_path, std::path::PathBuf::from("/tmp/saldo-test.sqlite"));
    assert_eq!(cfg.currency, Currency::Usd);
    assert!(cfg.assume_yes);
}
