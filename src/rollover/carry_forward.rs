//! Carry-forward rule for month-end balances.
//!
//! This module decides what happens to an employee's closing balance when a
//! period rolls over: a shortfall becomes debt charged against next month,
//! a surplus is redirected to the monthly expense aggregate.

use rust_decimal::Decimal;

use crate::models::LedgerEntry;

/// The outcome of applying the carry-forward rule to a closing entry.
///
/// At most one of `debt` and `surplus` is non-zero; both are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarryForward {
    /// Shortfall carried into next period as an expense.
    pub debt: Decimal,
    /// Surplus redirected to the current month's expense aggregate.
    pub surplus: Decimal,
}

impl CarryForward {
    /// Neither debt nor surplus.
    pub const NONE: Self = Self {
        debt: Decimal::ZERO,
        surplus: Decimal::ZERO,
    };
}

/// Applies the carry-forward rule to an employee's current-period entry.
///
/// Rules:
/// - No entry for the period: nothing carries, next month opens clean.
/// - Negative balance: the absolute shortfall becomes next month's debt.
/// - Positive balance: the full surplus is redirected to organizational
///   expense; the employee does not keep it and no debt carries.
/// - Zero balance: nothing carries.
///
/// # Example
///
/// ```
/// use rollover_engine::rollover::carry_forward;
/// use rust_decimal::Decimal;
///
/// let outcome = carry_forward(None);
/// assert_eq!(outcome.debt, Decimal::ZERO);
/// assert_eq!(outcome.surplus, Decimal::ZERO);
/// ```
pub fn carry_forward(current: Option<&LedgerEntry>) -> CarryForward {
    let Some(entry) = current else {
        return CarryForward::NONE;
    };

    if entry.balance < Decimal::ZERO {
        CarryForward {
            debt: entry.balance.abs(),
            surplus: Decimal::ZERO,
        }
    } else if entry.balance > Decimal::ZERO {
        CarryForward {
            debt: Decimal::ZERO,
            surplus: entry.balance,
        }
    } else {
        CarryForward::NONE
    }
}
