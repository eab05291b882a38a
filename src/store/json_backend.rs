//! JSON-file document store.
//!
//! Persists the whole document set as one JSON file. A commit stages the
//! batch against a copy of the in-memory state and replaces the file via
//! write-to-temp-then-rename, so a crash or write failure never leaves a
//! partial batch on disk or in memory.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    EmployeeRecord, LedgerEntry, LedgerEntryDraft, MonthlyExpenseAggregate, Period, RolloverRun,
};

use super::state::StoreState;
use super::{DocumentStore, WriteBatch};

const TMP_SUFFIX: &str = "tmp";

/// Single-file JSON store.
///
/// # Example
///
/// ```no_run
/// use rollover_engine::store::JsonStore;
///
/// let store = JsonStore::open("./data/ledger.json")?;
/// # Ok::<(), rollover_engine::error::EngineError>(())
/// ```
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    state: Mutex<StoreState>,
}

impl JsonStore {
    /// Opens the store at `path`, loading existing documents if the file
    /// exists and starting empty otherwise.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the file cannot be read or does not
    /// contain a valid document set.
    pub fn open(path: impl Into<PathBuf>) -> EngineResult<Self> {
        let path = path.into();
        let state = if path.exists() {
            let data = fs::read_to_string(&path).map_err(|e| EngineError::StoreUnavailable {
                message: format!("failed to read {}: {}", path.display(), e),
            })?;
            serde_json::from_str(&data).map_err(|e| EngineError::StoreUnavailable {
                message: format!("failed to parse {}: {}", path.display(), e),
            })?
        } else {
            StoreState::default()
        };

        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    fn lock(&self) -> EngineResult<MutexGuard<'_, StoreState>> {
        self.state.lock().map_err(|_| EngineError::StoreUnavailable {
            message: "store lock poisoned".to_string(),
        })
    }

    /// Writes the state to a sibling temp file and renames it into place.
    fn persist(&self, state: &StoreState) -> EngineResult<()> {
        let json = serde_json::to_string_pretty(state).map_err(|e| EngineError::CommitFailed {
            message: format!("failed to serialize store state: {e}"),
        })?;
        write_atomic(&self.path, &json).map_err(|e| EngineError::CommitFailed {
            message: format!("failed to write {}: {}", self.path.display(), e),
        })
    }

    /// Stages a mutation against a copy of the state, persists it, and only
    /// then makes it visible in memory.
    fn stage<F>(&self, mutate: F) -> EngineResult<()>
    where
        F: FnOnce(&mut StoreState) -> EngineResult<()>,
    {
        let mut state = self.lock()?;
        let mut staged = state.clone();
        mutate(&mut staged)?;
        self.persist(&staged)?;
        *state = staged;
        Ok(())
    }
}

fn write_atomic(path: &Path, data: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = path.with_extension(TMP_SUFFIX);
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)
}

impl DocumentStore for JsonStore {
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
        self.stage(|state| {
            state.apply(batch, Utc::now());
            Ok(())
        })
    }

    fn put_employee(&self, employee: EmployeeRecord) -> EngineResult<()> {
        self.stage(|state| {
            state.put_employee(employee);
            Ok(())
        })
    }

    fn insert_ledger_entry(&self, draft: LedgerEntryDraft) -> EngineResult<()> {
        self.stage(|state| state.insert_ledger_entry(draft, Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    fn period(year: i32, month: u32) -> Period {
        Period::new(year, month).unwrap()
    }

    #[test]
    fn test_open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("ledger.json")).unwrap();
        assert!(store.employees().unwrap().is_empty());
    }

    #[test]
    fn test_commit_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");

        {
            let store = JsonStore::open(&path).unwrap();
            store
                .put_employee(EmployeeRecord {
                    id: "emp_001".to_string(),
                    display_name: "Alice".to_string(),
                    base_salary: Some(dec(1000)),
                })
                .unwrap();

            let mut batch = WriteBatch::new();
            batch.put_ledger_entry(LedgerEntryDraft::new(
                "emp_001",
                period(2026, 2),
                dec(1000),
                dec(200),
            ));
            batch.increment_expense_aggregate(2026, 1, dec(300));
            batch.record_rollover_run(period(2026, 2), 1);
            store.commit(batch).unwrap();
        }

        let reopened = JsonStore::open(&path).unwrap();
        let entry = reopened
            .ledger_entry("emp_001", period(2026, 2))
            .unwrap()
            .unwrap();
        assert_eq!(entry.balance, dec(800));
        assert_eq!(
            reopened
                .expense_aggregate(2026, 1)
                .unwrap()
                .unwrap()
                .total_expense,
            dec(300)
        );
        assert!(reopened.rollover_run(period(2026, 2)).unwrap().is_some());
    }

    #[test]
    fn test_duplicate_insert_leaves_file_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        let store = JsonStore::open(&path).unwrap();

        let draft = LedgerEntryDraft::new("emp_001", period(2026, 1), dec(1000), dec(0));
        store.insert_ledger_entry(draft.clone()).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        assert!(store.insert_ledger_entry(draft).is_err());
        let after = fs::read_to_string(&path).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_open_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, "not json").unwrap();

        match JsonStore::open(&path).unwrap_err() {
            EngineError::StoreUnavailable { message } => {
                assert!(message.contains("failed to parse"));
            }
            other => panic!("Expected StoreUnavailable, got {:?}", other),
        }
    }
}
