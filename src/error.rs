//! Error types for the rollover engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a rollover run.

use thiserror::Error;

/// The main error type for the rollover engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use rollover_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rollover.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rollover.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The schedule configuration was invalid (day of month or timezone offset).
    #[error("Invalid schedule: {message}")]
    InvalidSchedule {
        /// A description of what made the schedule invalid.
        message: String,
    },

    /// A period string or component was not a valid year-month.
    #[error("Invalid period '{value}': {message}")]
    InvalidPeriod {
        /// The offending period value.
        value: String,
        /// A description of what made the period invalid.
        message: String,
    },

    /// A ledger entry already exists for the (employee, period) key.
    #[error("Duplicate ledger entry for employee '{employee_id}' in period {period}")]
    DuplicateLedgerEntry {
        /// The employee the entry belongs to.
        employee_id: String,
        /// The period the entry covers, rendered `YYYY-MM`.
        period: String,
    },

    /// The document store could not be reached or read.
    #[error("Store unavailable: {message}")]
    StoreUnavailable {
        /// A description of the store failure.
        message: String,
    },

    /// The atomic batch commit failed; no writes from the run were applied.
    #[error("Commit failed: {message}")]
    CommitFailed {
        /// A description of the commit failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/rollover.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rollover.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_period_displays_value_and_message() {
        let error = EngineError::InvalidPeriod {
            value: "2026-13".to_string(),
            message: "month out of range".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid period '2026-13': month out of range"
        );
    }

    #[test]
    fn test_duplicate_ledger_entry_displays_key() {
        let error = EngineError::DuplicateLedgerEntry {
            employee_id: "emp_001".to_string(),
            period: "2026-01".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Duplicate ledger entry for employee 'emp_001' in period 2026-01"
        );
    }

    #[test]
    fn test_commit_failed_displays_message() {
        let error = EngineError::CommitFailed {
            message: "simulated outage".to_string(),
        };
        assert_eq!(error.to_string(), "Commit failed: simulated outage");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_store_unavailable() -> EngineResult<()> {
            Err(EngineError::StoreUnavailable {
                message: "connection refused".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_store_unavailable()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
