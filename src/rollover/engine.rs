//! The monthly rollover run.
//!
//! One invocation closes the current period's ledger and opens the next:
//! every employee gets a next-period entry carrying any shortfall as debt,
//! surplus balances are redirected to the monthly expense aggregate, and all
//! writes commit as one atomic batch.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::EngineResult;
use crate::models::{LedgerEntryDraft, Period};
use crate::store::{DocumentStore, WriteBatch};

use super::carry_forward::carry_forward;

/// How a rollover invocation concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RolloverStatus {
    /// The run committed its batch.
    Completed,
    /// A run for the same target period had already committed; nothing was
    /// written.
    AlreadyApplied,
}

/// Summary of one rollover invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolloverOutcome {
    /// How the invocation concluded.
    pub status: RolloverStatus,
    /// The period the run closed.
    pub current_period: Period,
    /// The period the run opened.
    pub next_period: Period,
    /// Number of next-period entries written.
    pub entries_created: usize,
    /// Total surplus redirected to the expense aggregate.
    pub surplus_redirected: Decimal,
}

/// Runs the monthly salary ledger rollover as of the given instant.
///
/// `as_of` defines the current period in its own (civil) timezone; the run
/// closes that period and opens the next one. For every employee:
///
/// 1. The current-period entry is looked up by (employee id, period).
/// 2. The carry-forward rule converts a shortfall into next month's debt, or
///    redirects a surplus into the expense aggregate for `as_of`'s month.
/// 3. A next-period entry is drafted with the employee's current base salary
///    (zero when HR has not recorded one) and the carried debt as expenses.
///
/// All drafted entries, aggregate increments, and the run's idempotency
/// marker commit as one atomic batch: a failed commit leaves no trace and
/// the run is safe to retry. If a marker for the target period already
/// exists the run returns [`RolloverStatus::AlreadyApplied`] without
/// writing.
///
/// # Errors
///
/// Propagates `StoreUnavailable` from reads and `CommitFailed` from the
/// batch commit; in both cases no partial rollover is observable.
///
/// # Example
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use rollover_engine::rollover::run_rollover;
/// use rollover_engine::store::MemoryStore;
///
/// let store = MemoryStore::new();
/// let colombo = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
/// let as_of = colombo.with_ymd_and_hms(2026, 1, 25, 0, 0, 0).unwrap();
///
/// let outcome = run_rollover(&store, as_of).unwrap();
/// assert_eq!(outcome.next_period.to_string(), "2026-02");
/// ```
pub fn run_rollover(
    store: &dyn DocumentStore,
    as_of: DateTime<FixedOffset>,
) -> EngineResult<RolloverOutcome> {
    let current_period = Period::from_datetime(&as_of);
    let next_period = current_period.next();

    if store.rollover_run(next_period)?.is_some() {
        info!(period = %next_period, "rollover already applied, skipping");
        return Ok(RolloverOutcome {
            status: RolloverStatus::AlreadyApplied,
            current_period,
            next_period,
            entries_created: 0,
            surplus_redirected: Decimal::ZERO,
        });
    }

    let mut batch = WriteBatch::new();
    let mut surplus_redirected = Decimal::ZERO;
    let mut entries_created = 0;

    for employee in store.employees()? {
        let current_entry = store.ledger_entry(&employee.id, current_period)?;
        let outcome = carry_forward(current_entry.as_ref());

        if outcome.surplus > Decimal::ZERO {
            batch.increment_expense_aggregate(
                current_period.year(),
                current_period.month(),
                outcome.surplus,
            );
            surplus_redirected += outcome.surplus;
        }

        let base_salary = employee.base_salary_or_zero();
        batch.put_ledger_entry(LedgerEntryDraft::new(
            employee.id,
            next_period,
            base_salary,
            outcome.debt,
        ));
        entries_created += 1;
    }

    batch.record_rollover_run(next_period, entries_created);
    store.commit(batch)?;

    info!(period = %next_period, "salary rollover completed");

    Ok(RolloverOutcome {
        status: RolloverStatus::Completed,
        current_period,
        next_period,
        entries_created,
        surplus_redirected,
    })
}
