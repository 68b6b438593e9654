mod common;

use std::path::PathBuf;

use expense_core::config::{Config, ConfigManager};

#[test]
fn missing_config_file_yields_defaults() {
    let base = common::isolated_dir();
    let manager = ConfigManager::with_base_dir(base).unwrap();

    let config = manager.load().unwrap();
    assert_eq!(config.currency_symbol, "$");
    assert!(config.ui_color_enabled);
    assert!(config.data_dir.is_none());
}

#[test]
fn save_then_load_round_trips() {
    let base = common::isolated_dir();
    let manager = ConfigManager::with_base_dir(base).unwrap();

    let config = Config {
        currency_symbol: "€".into(),
        ui_color_enabled: false,
        data_dir: Some(PathBuf::from("/tmp/ledger-data")),
    };
    manager.save(&config).unwrap();

    let loaded = manager.load().unwrap();
    assert_eq!(loaded.currency_symbol, "€");
    assert!(!loaded.ui_color_enabled);
    assert_eq!(loaded.data_dir.as_deref(), Some(std::path::Path::new("/tmp/ledger-data")));
}

#[test]
fn partial_config_files_fill_in_defaults() {
    let base = common::isolated_dir();
    let manager = ConfigManager::with_base_dir(base.clone()).unwrap();
    std::fs::write(manager.config_path(), r#"{ "currency_symbol": "£" }"#).unwrap();

    let loaded = manager.load().unwrap();
    assert_eq!(loaded.currency_symbol, "£");
    assert!(loaded.ui_color_enabled);
}
