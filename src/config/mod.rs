//! Configuration loading and management for the rollover engine.
//!
//! This module provides functionality to load the rollover configuration
//! from a YAML file: the monthly fire schedule and the store location.
//!
//! # Example
//!
//! ```no_run
//! use rollover_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/rollover.yaml").unwrap();
//! println!("Rollover fires on day {}", config.schedule().day_of_month);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RolloverConfig, ScheduleConfig, StoreConfig};
