//! Configuration types for the rollover engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use std::path::PathBuf;

use chrono::FixedOffset;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Top-level configuration for the rollover engine.
#[derive(Debug, Clone, Deserialize)]
pub struct RolloverConfig {
    /// When the monthly rollover fires.
    pub schedule: ScheduleConfig,
    /// Where the document store lives.
    pub store: StoreConfig,
}

/// The monthly fire schedule: a fixed calendar day in a fixed civil timezone.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Day of the month the rollover fires (1..=28 so it exists every month).
    pub day_of_month: u32,
    /// Fixed UTC offset of the civil timezone, e.g. `"+05:30"`.
    pub utc_offset: String,
}

impl ScheduleConfig {
    /// Parses the configured `utc_offset` into a chrono offset.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSchedule` when the string is not `±HH:MM` or the
    /// offset is out of range.
    pub fn fixed_offset(&self) -> EngineResult<FixedOffset> {
        let invalid = || EngineError::InvalidSchedule {
            message: format!("utc_offset '{}' is not of the form ±HH:MM", self.utc_offset),
        };

        let (sign, rest) = if let Some(rest) = self.utc_offset.strip_prefix('+') {
            (1i32, rest)
        } else if let Some(rest) = self.utc_offset.strip_prefix('-') {
            (-1i32, rest)
        } else {
            return Err(invalid());
        };
        let (hours_part, minutes_part) = rest.split_once(':').ok_or_else(invalid)?;
        let hours: i32 = hours_part.parse().map_err(|_| invalid())?;
        let minutes: i32 = minutes_part.parse().map_err(|_| invalid())?;
        if hours > 23 || minutes > 59 {
            return Err(invalid());
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
    }
}

/// Location of the persistent document store.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path of the JSON store file.
    pub data_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(offset: &str) -> ScheduleConfig {
        ScheduleConfig {
            day_of_month: 25,
            utc_offset: offset.to_string(),
        }
    }

    #[test]
    fn test_positive_offset_parses() {
        let offset = schedule("+05:30").fixed_offset().unwrap();
        assert_eq!(offset, FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap());
    }

    #[test]
    fn test_negative_offset_parses() {
        let offset = schedule("-03:00").fixed_offset().unwrap();
        assert_eq!(offset, FixedOffset::west_opt(3 * 3600).unwrap());
    }

    #[test]
    fn test_offset_requires_sign() {
        assert!(schedule("05:30").fixed_offset().is_err());
    }

    #[test]
    fn test_offset_rejects_garbage() {
        assert!(schedule("+0530").fixed_offset().is_err());
        assert!(schedule("+aa:bb").fixed_offset().is_err());
        assert!(schedule("+25:00").fixed_offset().is_err());
    }

    #[test]
    fn test_deserialize_full_config() {
        let yaml = r#"
schedule:
  day_of_month: 25
  utc_offset: "+05:30"
store:
  data_path: ./data/ledger.json
"#;
        let config: RolloverConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.schedule.day_of_month, 25);
        assert_eq!(config.store.data_path, PathBuf::from("./data/ledger.json"));
    }
}
