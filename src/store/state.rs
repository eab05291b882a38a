//! In-memory document state shared by the store backends.
//!
//! Both backends hold the full document set in memory and differ only in
//! persistence; the lookup and batch-apply semantics live here so they
//! behave identically.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    EmployeeRecord, LedgerEntry, LedgerEntryDraft, MonthlyExpenseAggregate, Period, RolloverRun,
};

use super::{WriteBatch, WriteOp};

/// The full document set: all four collections, keyed by document identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct StoreState {
    /// Employee records keyed by employee id.
    #[serde(default)]
    employees: BTreeMap<String, EmployeeRecord>,
    /// Ledger entries keyed by `"{employee_id}:{period}"`.
    #[serde(default)]
    entries: BTreeMap<String, LedgerEntry>,
    /// Expense aggregates keyed by `"{year}-{month}"` (zero-padded).
    #[serde(default)]
    aggregates: BTreeMap<String, MonthlyExpenseAggregate>,
    /// Rollover-run markers keyed by target period.
    #[serde(default)]
    runs: BTreeMap<String, RolloverRun>,
}

fn aggregate_key(year: i32, month: u32) -> String {
    format!("{year:04}-{month:02}")
}

impl StoreState {
    pub(crate) fn employees(&self) -> Vec<EmployeeRecord> {
        self.employees.values().cloned().collect()
    }

    pub(crate) fn ledger_entry(&self, employee_id: &str, period: Period) -> Option<LedgerEntry> {
        self.entries.get(&format!("{employee_id}:{period}")).cloned()
    }

    pub(crate) fn expense_aggregate(
        &self,
        year: i32,
        month: u32,
    ) -> Option<MonthlyExpenseAggregate> {
        self.aggregates.get(&aggregate_key(year, month)).cloned()
    }

    pub(crate) fn rollover_run(&self, period: Period) -> Option<RolloverRun> {
        self.runs.get(&period.to_string()).cloned()
    }

    pub(crate) fn put_employee(&mut self, employee: EmployeeRecord) {
        self.employees.insert(employee.id.clone(), employee);
    }

    /// Inserts a manual ledger entry, upholding the one-entry-per-(employee,
    /// period) invariant at the write path.
    pub(crate) fn insert_ledger_entry(
        &mut self,
        draft: LedgerEntryDraft,
        now: DateTime<Utc>,
    ) -> EngineResult<()> {
        let key = draft.doc_id();
        if self.entries.contains_key(&key) {
            return Err(EngineError::DuplicateLedgerEntry {
                employee_id: draft.employee_id,
                period: draft.period.to_string(),
            });
        }
        self.entries.insert(key, draft.into_entry(now));
        Ok(())
    }

    /// Applies every write in the batch. Ops cannot fail individually, so a
    /// caller holding exclusive access gets all-or-nothing semantics by
    /// construction.
    pub(crate) fn apply(&mut self, batch: WriteBatch, now: DateTime<Utc>) {
        for op in batch.ops() {
            match op {
                WriteOp::PutLedgerEntry(draft) => {
                    let entry = draft.clone().into_entry(now);
                    self.entries.insert(entry.doc_id(), entry);
                }
                WriteOp::IncrementExpenseAggregate {
                    year,
                    month,
                    amount,
                } => {
                    self.increment_aggregate(*year, *month, *amount, now);
                }
                WriteOp::RecordRolloverRun {
                    period,
                    entries_created,
                } => {
                    self.runs.insert(
                        period.to_string(),
                        RolloverRun {
                            period: *period,
                            entries_created: *entries_created,
                            completed_at: now,
                        },
                    );
                }
            }
        }
    }

    fn increment_aggregate(&mut self, year: i32, month: u32, amount: Decimal, now: DateTime<Utc>) {
        self.aggregates
            .entry(aggregate_key(year, month))
            .and_modify(|aggregate| {
                aggregate.total_expense += amount;
                aggregate.updated_at = now;
            })
            .or_insert(MonthlyExpenseAggregate {
                year,
                month,
                total_expense: amount,
                updated_at: now,
            });
    }
}
