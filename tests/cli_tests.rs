// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use saldo::clock::ManualClock;
use saldo::commands::{budgets, categories, exporter, settings, transactions};
use saldo::error::LedgerError;
use saldo::ledger::Ledger;
use saldo::models::Theme;
use saldo::store::MemoryStore;
use saldo::{cli, commands};
use tempfile::tempdir;

fn ledger() -> Ledger {
    let now = Utc.with_ymd_and_hms(2024, 1, 25, 10, 0, 0).unwrap();
    Ledger::open_with_clock(MemoryStore::new(), ManualClock::new(now))
}

fn run(ledger: &mut Ledger, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["saldo"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("tx", sub)) => transactions::handle(ledger, sub),
        Some(("category", sub)) => categories::handle(ledger, sub),
        Some(("budget", sub)) => budgets::handle(ledger, sub),
        Some(("settings", sub)) => settings::handle(ledger, sub),
        Some(("report", sub)) => commands::reports::handle(ledger, sub),
        Some(("export", sub)) => exporter::handle(ledger, sub),
        _ => panic!("unexpected subcommand"),
    }
}

fn ledger_error(err: &anyhow::Error) -> &LedgerError {
    err.downcast_ref::<LedgerError>().expect("ledger error")
}

#[test]
fn tx_add_accepts_decimal_comma() {
    let mut l = ledger();
    run(&mut l, &["tx", "add", "12,50", "--desc", "Coffee", "-c", "Freizeit"]).unwrap();
    assert_eq!(l.transactions().len(), 1);
    assert_eq!(l.transactions()[0].amount, Decimal::new(1250, 2));
    assert_eq!(l.transactions()[0].category, "Freizeit");
}

#[test]
fn tx_add_reports_invalid_amount() {
    let mut l = ledger();
    for bad in ["abc", "-3", "0"] {
        let err = run(&mut l, &["tx", "add", bad]).unwrap_err();
        assert!(matches!(ledger_error(&err), LedgerError::InvalidAmount(_)));
    }
    assert!(l.transactions().is_empty());
}

#[test]
fn tx_list_searches_and_limits() {
    let mut l = ledger();
    run(&mut l, &["tx", "add", "5", "-d", "Coffee"]).unwrap();
    run(&mut l, &["tx", "add", "7", "-d", "Bus", "-c", "Transport"]).unwrap();
    run(&mut l, &["tx", "add", "3", "-d", "coffee refill"]).unwrap();

    let m = cli::build_cli().get_matches_from(["saldo", "tx", "list", "--search", "COF"]);
    let (_, tx_m) = m.subcommand().unwrap();
    let (_, list_m) = tx_m.subcommand().unwrap();
    let rows = transactions::query_rows(&l, list_m).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.amount.starts_with("CHF ")));

    let m = cli::build_cli().get_matches_from(["saldo", "tx", "list", "--limit", "1"]);
    let (_, tx_m) = m.subcommand().unwrap();
    let (_, list_m) = tx_m.subcommand().unwrap();
    assert_eq!(transactions::query_rows(&l, list_m).unwrap().len(), 1);
}

#[test]
fn tx_rm_of_unknown_id_is_silent() {
    let mut l = ledger();
    run(&mut l, &["tx", "add", "5"]).unwrap();
    run(&mut l, &["tx", "rm", "missing"]).unwrap();
    assert_eq!(l.transactions().len(), 1);
    let id = l.transactions()[0].id.clone();
    run(&mut l, &["tx", "rm", &id]).unwrap();
    assert!(l.transactions().is_empty());
}

#[test]
fn category_commands_round_trip() {
    let mut l = ledger();
    run(&mut l, &["category", "add", "Food"]).unwrap();
    let err = run(&mut l, &["category", "add", "Food"]).unwrap_err();
    assert!(matches!(ledger_error(&err), LedgerError::DuplicateCategory(_)));
    run(&mut l, &["category", "rename", "Food", "Essen"]).unwrap();
    run(&mut l, &["category", "rm", "Essen"]).unwrap();
    assert!(!l.categories().iter().any(|c| c == "Food" || c == "Essen"));
}

#[test]
fn budget_and_payday_commands() {
    let mut l = ledger();
    run(&mut l, &["budget", "set", "1200.5"]).unwrap();
    assert_eq!(l.budget(), Decimal::new(120050, 2));
    run(&mut l, &["budget", "payday", "15"]).unwrap();
    assert_eq!(l.payday(), 15);

    let err = run(&mut l, &["budget", "payday", "30"]).unwrap_err();
    assert!(matches!(ledger_error(&err), LedgerError::InvalidPayday(30)));
    assert_eq!(l.payday(), 15);

    let err = run(&mut l, &["budget", "set", "-10"]).unwrap_err();
    assert!(matches!(ledger_error(&err), LedgerError::InvalidBudget(_)));
}

#[test]
fn settings_commands() {
    let mut l = ledger();
    run(&mut l, &["settings", "name", "Mia"]).unwrap();
    run(&mut l, &["settings", "theme", "Dark"]).unwrap();
    assert_eq!(l.name(), "Mia");
    assert_eq!(l.theme(), Theme::Dark);
    assert!(run(&mut l, &["settings", "theme", "neon"]).is_err());
    assert_eq!(l.theme(), Theme::Dark);
}

#[test]
fn reports_run_on_populated_ledger() {
    let mut l = ledger();
    run(&mut l, &["budget", "set", "500"]).unwrap();
    run(&mut l, &["tx", "add", "40", "-c", "Lebensmittel"]).unwrap();
    run(&mut l, &["report", "summary", "--json"]).unwrap();
    run(&mut l, &["report", "summary", "--date", "2024-02-01"]).unwrap();
    run(&mut l, &["report", "periods"]).unwrap();
    run(&mut l, &["report", "categories", "--jsonl"]).unwrap();
    assert!(run(&mut l, &["report", "summary", "--date", "01/02/2024"]).is_err());
}

#[test]
fn export_writes_date_stamped_files() {
    let mut l = ledger();
    run(&mut l, &["tx", "add", "10", "-d", "Bread", "-c", "Lebensmittel"]).unwrap();
    run(&mut l, &["tx", "add", "20", "-d", "Cinema", "-c", "Freizeit"]).unwrap();

    let dir = tempdir().unwrap();
    let dir_str = dir.path().to_string_lossy().to_string();
    run(&mut l, &["export", "csv", "--dir", &dir_str]).unwrap();
    run(&mut l, &["export", "doc", "--dir", &dir_str]).unwrap();

    let csv = std::fs::read_to_string(dir.path().join("saldo_2024-01-25.csv")).unwrap();
    assert!(csv.starts_with("\"Kategorie\",\"Beschreibung\",\"Betrag\",\"Datum\""));
    assert_eq!(csv.lines().count(), 3);

    let doc = std::fs::read_to_string(dir.path().join("saldo_2024-01-25.doc")).unwrap();
    assert!(doc.starts_with('\u{feff}'));
    assert!(doc.contains("CHF 30.00"));
}

#[test]
fn export_without_transactions_is_a_notice() {
    let l = ledger();
    let dir = tempdir().unwrap();
    let written = exporter::write_export(&l, dir.path(), exporter::Format::Csv).unwrap();
    assert!(written.is_none());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
