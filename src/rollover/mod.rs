//! Rollover logic for the salary ledger.
//!
//! This module contains the monthly rollover run itself, the carry-forward
//! rule it applies to closing balances, and the schedule that triggers it.

mod carry_forward;
mod engine;
mod schedule;

pub use carry_forward::{CarryForward, carry_forward};
pub use engine::{RolloverOutcome, RolloverStatus, run_rollover};
pub use schedule::{next_fire, run_scheduler};
