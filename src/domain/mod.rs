//! Pure domain models. No I/O, no CLI, no storage.

pub mod transaction;

pub use transaction::*;
