use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid amount `{0}`: must be a finite number greater than zero")]
    InvalidAmount(String),
    #[error("Index {index} out of range: ledger holds {len} transaction(s)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::PersistenceUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::PersistenceUnavailable(err.to_string())
    }
}
