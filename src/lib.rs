#![doc(test(attr(deny(warnings))))]

//! Expense Core offers a persisted personal ledger of income and expense
//! entries, derived summary totals, and the input adapters (free-text
//! command parsing, receipt capture) that feed it.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod inputs;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}
