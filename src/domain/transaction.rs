//! Domain model for a single recorded income or expense event.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Distinguishes money coming in from money going out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Description applied when the user leaves the field empty.
    pub fn default_description(self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }

    /// Sign prefix used when rendering amounts.
    pub fn sign(self) -> char {
        match self {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        };
        f.write_str(label)
    }
}

/// One recorded ledger entry. Immutable once created; positional deletion
/// is the only removal path.
///
/// Field names on the wire are fixed (`type`, `amount`, `description`,
/// `date`) so previously persisted slots keep loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub description: String,
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Builds a transaction stamped with the current time, applying the
    /// per-kind default when the description is absent or blank.
    pub fn new(kind: TransactionKind, amount: f64, description: Option<&str>) -> Self {
        let description = description
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| kind.default_description().to_string());
        Self {
            kind,
            amount,
            description,
            date: Utc::now(),
        }
    }
}
