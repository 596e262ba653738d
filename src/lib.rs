//! An in-memory personal banking ledger.
//!
//! The core lives in [`ledger`]: customers hold accounts, accounts accept
//! deposits and withdrawals under per-account-type rules, and every accepted
//! operation lands in an append-only, timestamped history.
//!
//! Around the core, [`input`], [`output`] and [`run`] provide a CSV session
//! pipeline: a file of operations in, a summary of final balances out.

pub mod error_handler;
pub mod input;
pub mod ledger;
pub mod output;
pub mod run;
