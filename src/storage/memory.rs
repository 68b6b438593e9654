use std::cell::{Cell, RefCell};

use crate::domain::Transaction;
use crate::errors::{LedgerError, Result};

use super::TransactionStore;

/// In-memory slot used by tests and ephemeral sessions. Writes can be made
/// to fail on demand to exercise the degraded-persistence path.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<Vec<Transaction>>,
    reject_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<Transaction>) -> Self {
        Self {
            entries: RefCell::new(entries),
            reject_writes: Cell::new(false),
        }
    }

    /// Makes every subsequent `write` fail with `PersistenceUnavailable`.
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }

    /// Snapshot of what the slot currently holds.
    pub fn snapshot(&self) -> Vec<Transaction> {
        self.entries.borrow().clone()
    }
}

impl TransactionStore for MemoryStore {
    fn read(&self) -> Result<Vec<Transaction>> {
        Ok(self.entries.borrow().clone())
    }

    fn write(&self, transactions: &[Transaction]) -> Result<()> {
        if self.reject_writes.get() {
            return Err(LedgerError::PersistenceUnavailable(
                "memory store rejecting writes".into(),
            ));
        }
        *self.entries.borrow_mut() = transactions.to_vec();
        Ok(())
    }
}
