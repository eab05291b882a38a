//! Request types for the rollover engine API.
//!
//! This module defines the JSON request structure for the `/rollover`
//! endpoint.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Request body for the `POST /rollover` endpoint.
///
/// The body is optional; when present it may pin the run to an explicit
/// instant, which is what a re-triggered or backfilled run does. Without it
/// the run uses the current time in the configured civil timezone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RolloverRequest {
    /// The instant defining the current period, RFC 3339 with offset.
    #[serde(default)]
    pub as_of: Option<DateTime<FixedOffset>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_with_as_of() {
        let json = r#"{"as_of": "2026-01-25T00:00:00+05:30"}"#;
        let request: RolloverRequest = serde_json::from_str(json).unwrap();

        let colombo = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        assert_eq!(
            request.as_of,
            Some(colombo.with_ymd_and_hms(2026, 1, 25, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_deserialize_empty_object() {
        let request: RolloverRequest = serde_json::from_str("{}").unwrap();
        assert!(request.as_of.is_none());
    }
}
