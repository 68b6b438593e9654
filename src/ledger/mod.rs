//! The ledger: an insertion-ordered transaction sequence with write-through
//! persistence and derived summary totals.

use serde::Serialize;
use tracing::warn;

use crate::domain::{Transaction, TransactionKind};
use crate::errors::{LedgerError, Result};
use crate::storage::TransactionStore;

/// Derived totals over the full transaction sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Summary {
    pub total_income: f64,
    pub total_expense: f64,
    pub net: f64,
}

impl Summary {
    pub fn is_profit(&self) -> bool {
        self.net >= 0.0
    }
}

/// Owns the ordered transaction sequence. Every mutation re-writes the full
/// sequence to the injected store; a failed write degrades that call to
/// in-memory-only operation instead of surfacing an error.
pub struct Ledger {
    store: Box<dyn TransactionStore>,
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Hydrates a ledger from the store. An absent or unreadable slot
    /// degrades to an empty sequence.
    pub fn load(store: Box<dyn TransactionStore>) -> Self {
        let transactions = match store.read() {
            Ok(entries) => entries,
            Err(err) => {
                warn!("could not read persisted transactions, starting empty: {err}");
                Vec::new()
            }
        };
        Self {
            store,
            transactions,
        }
    }

    /// Validates and appends a new transaction, returning the created entry.
    ///
    /// Rejects non-finite and non-positive amounts with `InvalidAmount`,
    /// leaving the sequence untouched.
    pub fn add(
        &mut self,
        kind: TransactionKind,
        amount: f64,
        description: Option<&str>,
    ) -> Result<Transaction> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(amount.to_string()));
        }
        let transaction = Transaction::new(kind, amount, description);
        self.transactions.push(transaction.clone());
        self.persist();
        Ok(transaction)
    }

    /// Removes the entry at `index` (0-based insertion order), shifting
    /// later entries down by one, and returns it.
    pub fn remove_at(&mut self, index: usize) -> Result<Transaction> {
        let len = self.transactions.len();
        if index >= len {
            return Err(LedgerError::IndexOutOfRange { index, len });
        }
        let removed = self.transactions.remove(index);
        self.persist();
        Ok(removed)
    }

    /// Read-only view of the sequence in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Folds the full sequence into income/expense totals. Pure and O(n);
    /// no cached aggregation, which is fine at personal-ledger scale.
    pub fn summary(&self) -> Summary {
        let mut totals = Summary::default();
        for txn in &self.transactions {
            match txn.kind {
                TransactionKind::Income => totals.total_income += txn.amount,
                TransactionKind::Expense => totals.total_expense += txn.amount,
            }
        }
        totals.net = totals.total_income - totals.total_expense;
        totals
    }

    fn persist(&self) {
        if let Err(err) = self.store.write(&self.transactions) {
            warn!("persist failed, ledger continues in memory for this session: {err}");
        }
    }
}
