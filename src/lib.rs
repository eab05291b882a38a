//! Monthly salary ledger rollover engine.
//!
//! This crate implements the scheduled monthly transition of a salary ledger:
//! for every employee it closes out the current month's ledger entry, applies
//! a carry-forward rule for unpaid/overpaid balances, updates a global monthly
//! expense aggregate, and opens next month's entry — all committed as one
//! atomic batch against a document store.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod rollover;
pub mod store;
