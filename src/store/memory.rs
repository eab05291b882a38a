//! In-memory document store.
//!
//! Backs tests and benches. Holds the full document set behind a mutex; a
//! commit applies its whole batch under one lock acquisition, so readers
//! never observe a partial batch. Commit failure can be injected to exercise
//! the engine's atomicity contract.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    EmployeeRecord, LedgerEntry, LedgerEntryDraft, MonthlyExpenseAggregate, Period, RolloverRun,
};

use super::state::StoreState;
use super::{DocumentStore, WriteBatch};

/// Mutex-guarded in-memory store.
///
/// # Example
///
/// ```
/// use rollover_engine::store::{DocumentStore, MemoryStore};
/// use rollover_engine::models::EmployeeRecord;
///
/// let store = MemoryStore::new();
/// store.put_employee(EmployeeRecord {
///     id: "emp_001".to_string(),
///     display_name: "Alice".to_string(),
///     base_salary: None,
/// }).unwrap();
/// assert_eq!(store.employees().unwrap().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<StoreState>,
    fail_commits: AtomicBool,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, every commit fails with `CommitFailed` and applies nothing.
    /// Used to exercise the all-or-nothing contract.
    pub fn set_fail_commits(&self, fail: bool) {
        self.fail_commits.store(fail, Ordering::SeqCst);
    }

    fn lock(&self) -> EngineResult<std::sync::MutexGuard<'_, StoreState>> {
        self.state.lock().map_err(|_| EngineError::StoreUnavailable {
            message: "store lock poisoned".to_string(),
        })
    }
}

impl DocumentStore for MemoryStore {
    fn employees(&self) -> EngineResult<Vec<EmployeeRecord>> {
        Ok(self.lock()?.employees())
    }

    fn ledger_entry(
        &self,
        employee_id: &str,
        period: Period,
    ) -> EngineResult<Option<LedgerEntry>> {
        Ok(self.lock()?.ledger_entry(employee_id, period))
    }

    fn expense_aggregate(
        &self,
        year: i32,
        month: u32,
    ) -> EngineResult<Option<MonthlyExpenseAggregate>> {
        Ok(self.lock()?.expense_aggregate(year, month))
    }

    fn rollover_run(&self, period: Period) -> EngineResult<Option<RolloverRun>> {
        Ok(self.lock()?.rollover_run(period))
    }

    fn commit(&self, batch: WriteBatch) -> EngineResult<()> {
        let mut state = self.lock()?;
        if self.fail_commits.load(Ordering::SeqCst) {
            return Err(EngineError::CommitFailed {
                message: "injected commit failure".to_string(),
            });
        }
        state.apply(batch, Utc::now());
        Ok(())
    }

    fn put_employee(&self, employee: EmployeeRecord) -> EngineResult<()> {
        self.lock()?.put_employee(employee);
        Ok(())
    }

    fn insert_ledger_entry(&self, draft: LedgerEntryDraft) -> EngineResult<()> {
        self.lock()?.insert_ledger_entry(draft, Utc::now())
    }
}
