//! Document store abstraction for the rollover engine.
//!
//! The engine reads three collections (employees, ledger entries, expense
//! aggregates) plus rollover-run markers, and writes through an atomic
//! multi-write batch: either every queued write applies or none do. Two
//! backends are provided — [`MemoryStore`] for tests and benches, and
//! [`JsonStore`] for persistent single-file storage.

mod json_backend;
mod memory;
mod state;

pub use json_backend::JsonStore;
pub use memory::MemoryStore;

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{
    EmployeeRecord, LedgerEntry, LedgerEntryDraft, MonthlyExpenseAggregate, Period, RolloverRun,
};

/// A single queued write in a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOp {
    /// Upsert a ledger entry by its deterministic (employee, period) identity.
    PutLedgerEntry(LedgerEntryDraft),
    /// Additively merge an amount into the expense aggregate for a month,
    /// creating the aggregate if absent.
    IncrementExpenseAggregate {
        /// The calendar year of the aggregate.
        year: i32,
        /// The 1-based calendar month of the aggregate.
        month: u32,
        /// The amount to add; increments are commutative and associative.
        amount: Decimal,
    },
    /// Record that a rollover completed for a target period.
    RecordRolloverRun {
        /// The period the run opened.
        period: Period,
        /// Number of ledger entries the run created.
        entries_created: usize,
    },
}

/// An ordered collection of writes committed as one atomic unit.
///
/// # Example
///
/// ```
/// use rollover_engine::store::WriteBatch;
/// use rollover_engine::models::{LedgerEntryDraft, Period};
/// use rust_decimal::Decimal;
///
/// let mut batch = WriteBatch::new();
/// batch.put_ledger_entry(LedgerEntryDraft::new(
///     "emp_001",
///     Period::new(2026, 2).unwrap(),
///     Decimal::new(1000, 0),
///     Decimal::ZERO,
/// ));
/// assert_eq!(batch.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WriteBatch {
    ops: Vec<WriteOp>,
}

impl WriteBatch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an upsert of a ledger entry.
    pub fn put_ledger_entry(&mut self, draft: LedgerEntryDraft) {
        self.ops.push(WriteOp::PutLedgerEntry(draft));
    }

    /// Queues an additive increment of the expense aggregate for a month.
    pub fn increment_expense_aggregate(&mut self, year: i32, month: u32, amount: Decimal) {
        self.ops.push(WriteOp::IncrementExpenseAggregate {
            year,
            month,
            amount,
        });
    }

    /// Queues the idempotency marker for a completed rollover.
    pub fn record_rollover_run(&mut self, period: Period, entries_created: usize) {
        self.ops.push(WriteOp::RecordRolloverRun {
            period,
            entries_created,
        });
    }

    /// Number of queued writes.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the batch has no queued writes.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The queued writes, in queue order.
    pub fn ops(&self) -> &[WriteOp] {
        &self.ops
    }
}

/// The document store the rollover engine runs against.
///
/// Reads are independent and may be issued in any order; writes only happen
/// through [`DocumentStore::commit`], which applies a whole [`WriteBatch`]
/// atomically, or through the collaborator paths ([`DocumentStore::put_employee`],
/// [`DocumentStore::insert_ledger_entry`]) that populate the store outside
/// rollover runs. Timestamps on written documents are assigned by the store
/// at apply time.
pub trait DocumentStore: Send + Sync {
    /// Full scan of the employee collection.
    fn employees(&self) -> EngineResult<Vec<EmployeeRecord>>;

    /// Exact-key lookup of one employee's ledger entry for a period.
    fn ledger_entry(&self, employee_id: &str, period: Period)
    -> EngineResult<Option<LedgerEntry>>;

    /// The expense aggregate for a month, if any increment has reached it.
    fn expense_aggregate(
        &self,
        year: i32,
        month: u32,
    ) -> EngineResult<Option<MonthlyExpenseAggregate>>;

    /// The rollover-run marker for a target period, if a run completed.
    fn rollover_run(&self, period: Period) -> EngineResult<Option<RolloverRun>>;

    /// Applies a batch atomically: all queued writes or none.
    fn commit(&self, batch: WriteBatch) -> EngineResult<()>;

    /// HR collaborator path: upsert an employee record by id.
    fn put_employee(&self, employee: EmployeeRecord) -> EngineResult<()>;

    /// Manual-entry collaborator path: insert a ledger entry, rejecting a
    /// duplicate (employee, period) with `DuplicateLedgerEntry`.
    fn insert_ledger_entry(&self, draft: LedgerEntryDraft) -> EngineResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_batch() {
        let batch = WriteBatch::new();
        assert!(batch.is_empty());
        assert_eq!(batch.len(), 0);
    }

    #[test]
    fn test_batch_preserves_queue_order() {
        let mut batch = WriteBatch::new();
        batch.increment_expense_aggregate(2026, 1, Decimal::new(300, 0));
        batch.record_rollover_run(Period::new(2026, 2).unwrap(), 1);

        match &batch.ops()[0] {
            WriteOp::IncrementExpenseAggregate { amount, .. } => {
                assert_eq!(*amount, Decimal::new(300, 0));
            }
            other => panic!("Expected IncrementExpenseAggregate, got {:?}", other),
        }
        match &batch.ops()[1] {
            WriteOp::RecordRolloverRun {
                entries_created, ..
            } => assert_eq!(*entries_created, 1),
            other => panic!("Expected RecordRolloverRun, got {:?}", other),
        }
    }
}
