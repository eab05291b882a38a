//! Employee record model.
//!
//! This module defines the [`EmployeeRecord`] struct representing the HR base
//! data the rollover engine reads. Records are created and updated by the HR
//! collaborator path; the engine never mutates them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// HR base data for one employee.
///
/// The `id` is the stable join key for ledger entries; `display_name` is
/// display-only and carries no identity. A missing base salary is a data
/// defect the engine tolerates by reading it as zero.
///
/// # Example
///
/// ```
/// use rollover_engine::models::EmployeeRecord;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeRecord {
///     id: "emp_001".to_string(),
///     display_name: "Alice".to_string(),
///     base_salary: Some(Decimal::new(1000, 0)),
/// };
/// assert_eq!(employee.base_salary_or_zero(), Decimal::new(1000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Stable unique identifier, the join key for ledger entries.
    pub id: String,
    /// Human-readable name, display-only.
    pub display_name: String,
    /// Base monthly salary; `None` when HR has not recorded one yet.
    #[serde(default)]
    pub base_salary: Option<Decimal>,
}

impl EmployeeRecord {
    /// The base monthly salary, defaulting to zero when missing.
    pub fn base_salary_or_zero(&self) -> Decimal {
        self.base_salary.unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": "emp_001",
            "display_name": "Alice",
            "base_salary": "1000"
        }"#;

        let employee: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.display_name, "Alice");
        assert_eq!(employee.base_salary, Some(Decimal::new(1000, 0)));
    }

    #[test]
    fn test_missing_base_salary_deserializes_as_none() {
        let json = r#"{
            "id": "emp_002",
            "display_name": "Cara"
        }"#;

        let employee: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(employee.base_salary, None);
        assert_eq!(employee.base_salary_or_zero(), Decimal::ZERO);
    }

    #[test]
    fn test_base_salary_or_zero_passes_through_value() {
        let employee = EmployeeRecord {
            id: "emp_003".to_string(),
            display_name: "Bob".to_string(),
            base_salary: Some(Decimal::new(150000, 2)),
        };
        assert_eq!(employee.base_salary_or_zero(), Decimal::new(150000, 2));
    }

    #[test]
    fn test_serialize_round_trip() {
        let employee = EmployeeRecord {
            id: "emp_001".to_string(),
            display_name: "Alice".to_string(),
            base_salary: Some(Decimal::new(900, 0)),
        };
        let json = serde_json::to_string(&employee).unwrap();
        let back: EmployeeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, employee);
    }
}
