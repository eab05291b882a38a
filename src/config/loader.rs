//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the rollover
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{RolloverConfig, ScheduleConfig, StoreConfig};

/// Loads and validates the rollover configuration.
///
/// # File Format
///
/// ```text
/// schedule:
///   day_of_month: 25        # 1..=28
///   utc_offset: "+05:30"    # fixed civil timezone offset
/// store:
///   data_path: ./data/ledger.json
/// ```
///
/// # Example
///
/// ```no_run
/// use rollover_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/rollover.yaml")?;
/// println!("Fires on day {}", loader.schedule().day_of_month);
/// # Ok::<(), rollover_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RolloverConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML for the expected shape (`ConfigParseError`)
    /// - The schedule is invalid: day of month outside 1..=28 or a
    ///   malformed UTC offset (`InvalidSchedule`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: RolloverConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &RolloverConfig) -> EngineResult<()> {
        if !(1..=28).contains(&config.schedule.day_of_month) {
            return Err(EngineError::InvalidSchedule {
                message: format!(
                    "day_of_month {} is not in 1..=28",
                    config.schedule.day_of_month
                ),
            });
        }
        config.schedule.fixed_offset()?;
        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &RolloverConfig {
        &self.config
    }

    /// Returns the fire schedule.
    pub fn schedule(&self) -> &ScheduleConfig {
        &self.config.schedule
    }

    /// Returns the store location.
    pub fn store(&self) -> &StoreConfig {
        &self.config.store
    }
}
