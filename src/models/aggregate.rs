//! Monthly expense aggregate and rollover run models.
//!
//! The expense aggregate is the per-month running total of surplus salary
//! balances redirected to organizational expense. The rollover run marker is
//! the idempotency record that makes re-running a rollover for the same
//! target period a no-op.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Period;

/// Per-month running total of surplus balances redirected to expense.
///
/// Keyed by (year, month). Only ever mutated by additive increments; the
/// engine never decrements it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyExpenseAggregate {
    /// The calendar year of the aggregate.
    pub year: i32,
    /// The 1-based calendar month of the aggregate.
    pub month: u32,
    /// Total surplus redirected to expense this month.
    pub total_expense: Decimal,
    /// When the aggregate was last incremented, assigned by the store.
    pub updated_at: DateTime<Utc>,
}

/// Marker recording that a rollover completed for a target period.
///
/// Committed atomically with the run's ledger writes, so its presence means
/// the whole run applied. The engine checks it before doing any work, which
/// makes retries and duplicate triggers safe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolloverRun {
    /// The period the run opened (the period after the one it closed).
    pub period: Period,
    /// Number of ledger entries the run created.
    pub entries_created: usize,
    /// When the run's batch committed, assigned by the store.
    pub completed_at: DateTime<Utc>,
}
