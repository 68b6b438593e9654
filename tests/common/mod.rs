#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use assert_cmd::Command;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated directory that survives until the test run ends.
pub fn isolated_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Builds a script-mode CLI invocation with storage and config isolated
/// under `base`.
pub fn script_cmd(base: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("expense_cli").expect("binary builds");
    cmd.env("EXPENSE_CLI_SCRIPT", "1")
        .env("EXPENSE_CLI_DATA_DIR", base.join("data"))
        .env("EXPENSE_CLI_CONFIG_DIR", base.join("config"));
    cmd
}
