//! Round-trip coverage for the JSON slot backend.

mod common;

use std::fs;

use expense_core::domain::TransactionKind;
use expense_core::ledger::Ledger;
use expense_core::storage::{JsonStore, TransactionStore};

fn store_in(dir: &std::path::Path) -> JsonStore {
    JsonStore::new(Some(dir.to_path_buf())).expect("create json store")
}

#[test]
fn reload_reconstructs_the_exact_sequence() {
    let dir = common::isolated_dir();
    {
        let mut ledger = Ledger::load(Box::new(store_in(&dir)));
        ledger
            .add(TransactionKind::Income, 1000.0, Some("Salary"))
            .unwrap();
        ledger
            .add(TransactionKind::Expense, 45.5, Some("Groceries"))
            .unwrap();
        ledger.add(TransactionKind::Expense, 12.0, None).unwrap();
        ledger.remove_at(2).unwrap();
    }

    let persisted = store_in(&dir).read().unwrap();
    let reloaded = Ledger::load(Box::new(store_in(&dir)));

    assert_eq!(reloaded.transactions(), persisted.as_slice());
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.transactions()[0].description, "Salary");
    assert_eq!(reloaded.transactions()[1].description, "Groceries");

    let summary = reloaded.summary();
    assert_eq!(summary.total_income, 1000.0);
    assert_eq!(summary.total_expense, 45.5);
    assert_eq!(summary.net, 954.5);
}

#[test]
fn missing_slot_reads_as_empty() {
    let dir = common::isolated_dir();
    let ledger = Ledger::load(Box::new(store_in(&dir)));
    assert!(ledger.is_empty());
}

#[test]
fn corrupt_slot_degrades_to_empty() {
    let dir = common::isolated_dir();
    let store = store_in(&dir);
    fs::write(store.slot_path(), "{ not json").unwrap();

    let ledger = Ledger::load(Box::new(store));
    assert!(ledger.is_empty());
}

#[test]
fn slot_file_uses_the_legacy_wire_layout() {
    let dir = common::isolated_dir();
    let store = store_in(&dir);
    let mut ledger = Ledger::load(Box::new(store.clone()));
    ledger
        .add(TransactionKind::Expense, 9.99, Some("Coffee"))
        .unwrap();

    let raw = fs::read_to_string(store.slot_path()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &parsed.as_array().unwrap()[0];
    assert_eq!(entry["type"], "expense");
    assert_eq!(entry["amount"], 9.99);
    assert_eq!(entry["description"], "Coffee");
    assert!(entry["date"].as_str().unwrap().contains('T'));
}

#[test]
fn rejected_operations_do_not_touch_the_slot() {
    let dir = common::isolated_dir();
    let store = store_in(&dir);
    let mut ledger = Ledger::load(Box::new(store.clone()));
    ledger
        .add(TransactionKind::Income, 50.0, Some("Gift"))
        .unwrap();

    ledger
        .add(TransactionKind::Expense, -3.0, None)
        .unwrap_err();
    ledger.remove_at(7).unwrap_err();

    assert_eq!(store.read().unwrap().len(), 1);
}
