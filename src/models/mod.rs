//! Core data models for the rollover engine.
//!
//! This module contains all the domain models used throughout the engine.

mod aggregate;
mod employee;
mod ledger;
mod period;

pub use aggregate::{MonthlyExpenseAggregate, RolloverRun};
pub use employee::EmployeeRecord;
pub use ledger::{LedgerEntry, LedgerEntryDraft};
pub use period::Period;
