use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::Transaction;
use crate::errors::Result;

use super::TransactionStore;

/// Name of the single storage slot, kept identical to the key used by
/// earlier versions of the tracker so existing data keeps loading.
pub const STORAGE_SLOT: &str = "vibe-expense-tracker-transactions";

const SLOT_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed JSON persistence for the transaction slot.
#[derive(Debug, Clone)]
pub struct JsonStore {
    slot_path: PathBuf,
}

impl JsonStore {
    /// Creates a store rooted at `root`, falling back to the platform data
    /// directory when none is given.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let base = root.unwrap_or_else(default_base_dir);
        fs::create_dir_all(&base)?;
        let slot_path = base.join(format!("{}.{}", STORAGE_SLOT, SLOT_EXTENSION));
        Ok(Self { slot_path })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn slot_path(&self) -> &Path {
        &self.slot_path
    }
}

impl TransactionStore for JsonStore {
    fn read(&self) -> Result<Vec<Transaction>> {
        if !self.slot_path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.slot_path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn write(&self, transactions: &[Transaction]) -> Result<()> {
        let json = serde_json::to_string_pretty(transactions)?;
        write_atomic(&self.slot_path, &json)
    }
}

fn default_base_dir() -> PathBuf {
    let base = dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("expense-tracker")
}

/// Stages the payload to a temporary sibling and renames it into place so a
/// failed write never truncates the slot.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp = path.with_extension(TMP_SUFFIX);
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
