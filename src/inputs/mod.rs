//! Input adapters. Every alternate entry method produces an [`EntryDraft`]
//! and feeds it through the one validated `Ledger::add` entry point, so
//! amount validation lives in exactly one place.

pub mod receipt;
pub mod voice;

use crate::domain::{Transaction, TransactionKind};
use crate::errors::Result;
use crate::ledger::Ledger;

/// A candidate transaction extracted at an input boundary, not yet
/// validated or recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub kind: TransactionKind,
    pub amount: f64,
    pub description: Option<String>,
}

impl EntryDraft {
    pub fn new(kind: TransactionKind, amount: f64, description: Option<String>) -> Self {
        Self {
            kind,
            amount,
            description,
        }
    }

    /// Records this draft on the ledger, which re-validates the amount.
    pub fn record(self, ledger: &mut Ledger) -> Result<Transaction> {
        ledger.add(self.kind, self.amount, self.description.as_deref())
    }
}
