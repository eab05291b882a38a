//! Calendar period (year-month) model.
//!
//! This module defines the [`Period`] type used to key ledger entries and
//! expense aggregates. A period is a single calendar month, rendered as
//! `YYYY-MM` everywhere it appears in documents and logs.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, EngineResult};

/// A calendar year-month, the unit a salary ledger is kept in.
///
/// Periods order chronologically and serialize as the `YYYY-MM` string.
///
/// # Example
///
/// ```
/// use rollover_engine::models::Period;
///
/// let period = Period::new(2026, 1).unwrap();
/// assert_eq!(period.to_string(), "2026-01");
/// assert_eq!(period.next().to_string(), "2026-02");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Creates a period from a year and a 1-based month.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` if `month` is not in `1..=12`.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidPeriod {
                value: format!("{year:04}-{month:02}"),
                message: "month out of range".to_string(),
            });
        }
        Ok(Self { year, month })
    }

    /// Derives the period containing the given instant, in that instant's
    /// own timezone.
    pub fn from_datetime<Tz: TimeZone>(at: &DateTime<Tz>) -> Self {
        Self {
            year: at.year(),
            month: at.month(),
        }
    }

    /// Returns the following calendar month.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The calendar year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// The 1-based calendar month.
    pub fn month(self) -> u32 {
        self.month
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let invalid = |message: &str| EngineError::InvalidPeriod {
            value: s.to_string(),
            message: message.to_string(),
        };

        let (year_part, month_part) = s
            .split_once('-')
            .ok_or_else(|| invalid("expected YYYY-MM"))?;
        let year: i32 = year_part
            .parse()
            .map_err(|_| invalid("year is not a number"))?;
        let month: u32 = month_part
            .parse()
            .map_err(|_| invalid("month is not a number"))?;
        Self::new(year, month)
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
