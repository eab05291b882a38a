//! Monthly schedule for the rollover trigger.
//!
//! The rollover fires at 00:00 on a fixed day of every month, in a fixed
//! civil timezone offset. [`next_fire`] computes the next fire instant and
//! [`run_scheduler`] drives the engine from a tokio loop.

use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Utc};
use tracing::{error, info};

use crate::config::ScheduleConfig;
use crate::error::{EngineError, EngineResult};
use crate::store::DocumentStore;

use super::engine::run_rollover;

/// The first `day_of_month` at 00:00 strictly after `after`, in `after`'s
/// offset.
///
/// `day_of_month` must be in 1..=28 so the instant exists in every month.
///
/// # Example
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use rollover_engine::rollover::next_fire;
///
/// let colombo = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
/// let after = colombo.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap();
/// let fire = next_fire(after, 25).unwrap();
/// assert_eq!(fire, colombo.with_ymd_and_hms(2026, 1, 25, 0, 0, 0).unwrap());
/// ```
pub fn next_fire(
    after: DateTime<FixedOffset>,
    day_of_month: u32,
) -> EngineResult<DateTime<FixedOffset>> {
    if !(1..=28).contains(&day_of_month) {
        return Err(EngineError::InvalidSchedule {
            message: format!("day_of_month {day_of_month} is not in 1..=28"),
        });
    }

    let offset = *after.offset();
    let at = |year: i32, month: u32| {
        offset
            .with_ymd_and_hms(year, month, day_of_month, 0, 0, 0)
            .single()
            .ok_or_else(|| EngineError::InvalidSchedule {
                message: format!("no instant for {year:04}-{month:02}-{day_of_month:02}"),
            })
    };

    let this_month = at(after.year(), after.month())?;
    if this_month > after {
        return Ok(this_month);
    }
    if after.month() == 12 {
        at(after.year() + 1, 1)
    } else {
        at(after.year(), after.month() + 1)
    }
}

/// Drives the rollover engine on the configured monthly schedule.
///
/// Sleeps until the next fire instant, runs the rollover as of that instant,
/// and repeats. A failed run is logged and left for the operator to alert
/// on; the engine itself performs no retry (the next scheduled run, or a
/// manual trigger, is safe thanks to the run marker).
pub async fn run_scheduler(
    store: &dyn DocumentStore,
    schedule: &ScheduleConfig,
) -> EngineResult<()> {
    let offset = schedule.fixed_offset()?;

    loop {
        let now = Utc::now().with_timezone(&offset);
        let fire = next_fire(now, schedule.day_of_month)?;
        info!(fire = %fire, "rollover scheduled");

        if let Ok(wait) = (fire - now).to_std() {
            tokio::time::sleep(wait).await;
        }

        if let Err(err) = run_rollover(store, fire) {
            error!(error = %err, "rollover run failed");
        }
    }
}
