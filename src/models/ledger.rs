//! Ledger entry models.
//!
//! This module defines the per-employee, per-period salary ledger records:
//! [`LedgerEntry`] as stored, and [`LedgerEntryDraft`] as queued for commit
//! before the store assigns its timestamp.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Period;

/// A salary ledger record for one employee and one calendar month.
///
/// An entry is immutable once its period closes. Its document identity is
/// deterministic — `"{employee_id}:{period}"` — so there is at most one entry
/// per (employee, period) and re-writing the same entry is an upsert, not a
/// duplicate.
///
/// # Example
///
/// ```
/// use rollover_engine::models::{LedgerEntry, Period};
/// use rust_decimal::Decimal;
/// use chrono::Utc;
///
/// let entry = LedgerEntry {
///     employee_id: "emp_001".to_string(),
///     period: Period::new(2026, 2).unwrap(),
///     base_salary: Decimal::new(1000, 0),
///     expenses: Decimal::new(200, 0),
///     balance: Decimal::new(800, 0),
///     created_at: Utc::now(),
/// };
/// assert_eq!(entry.doc_id(), "emp_001:2026-02");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// The employee this entry belongs to.
    pub employee_id: String,
    /// The calendar month this entry covers.
    pub period: Period,
    /// Snapshot of the employee's base monthly salary when the entry opened.
    pub base_salary: Decimal,
    /// Expenses applied against this period, including carried-forward debt.
    pub expenses: Decimal,
    /// Resulting balance: `base_salary - expenses`.
    pub balance: Decimal,
    /// When the entry was committed, assigned by the store.
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    /// The deterministic document identity for this entry.
    pub fn doc_id(&self) -> String {
        doc_id(&self.employee_id, self.period)
    }
}

/// A ledger entry queued for commit, before the store assigns `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntryDraft {
    /// The employee this entry belongs to.
    pub employee_id: String,
    /// The calendar month this entry covers.
    pub period: Period,
    /// Snapshot of the employee's base monthly salary.
    pub base_salary: Decimal,
    /// Expenses applied against this period.
    pub expenses: Decimal,
}

impl LedgerEntryDraft {
    /// Creates a draft; the balance is derived, never supplied.
    pub fn new(
        employee_id: impl Into<String>,
        period: Period,
        base_salary: Decimal,
        expenses: Decimal,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            period,
            base_salary,
            expenses,
        }
    }

    /// The resulting balance for this draft: `base_salary - expenses`.
    pub fn balance(&self) -> Decimal {
        self.base_salary - self.expenses
    }

    /// The deterministic document identity for this draft.
    pub fn doc_id(&self) -> String {
        doc_id(&self.employee_id, self.period)
    }

    /// Finalizes the draft into a stored entry with the given commit time.
    pub fn into_entry(self, created_at: DateTime<Utc>) -> LedgerEntry {
        let balance = self.balance();
        LedgerEntry {
            employee_id: self.employee_id,
            period: self.period,
            base_salary: self.base_salary,
            expenses: self.expenses,
            balance,
            created_at,
        }
    }
}

fn doc_id(employee_id: &str, period: Period) -> String {
    format!("{employee_id}:{period}")
}
