//! Persistence backends for the transaction slot.

pub mod json_backend;
pub mod memory;

pub use json_backend::JsonStore;
pub use memory::MemoryStore;

use crate::domain::Transaction;
use crate::errors::Result;

/// Abstraction over the single persisted slot holding the full transaction
/// sequence. Writes always replace the whole sequence; there is no partial
/// update path.
pub trait TransactionStore {
    /// Reads the persisted sequence. A missing slot reads as empty.
    fn read(&self) -> Result<Vec<Transaction>>;

    /// Replaces the persisted sequence with `transactions`.
    fn write(&self, transactions: &[Transaction]) -> Result<()>;
}

impl<S: TransactionStore + ?Sized> TransactionStore for std::rc::Rc<S> {
    fn read(&self) -> Result<Vec<Transaction>> {
        (**self).read()
    }

    fn write(&self, transactions: &[Transaction]) -> Result<()> {
        (**self).write(transactions)
    }
}
