//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Creates a new timestamp by adding the specified number of days.
    ///
    /// Negative values subtract days.
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Returns the duration from another timestamp to this one.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// ISO 8601 representation, as shown on order confirmations.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn add_days_moves_forward() {
        let start = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 5, 15, 9, 0, 0).unwrap());
        let later = start.add_days(7);

        assert!(start.is_before(&later));
        assert_eq!(later.duration_since(&start).num_days(), 7);
        assert_eq!(later.to_rfc3339(), "2024-05-22T09:00:00+00:00");
    }

    #[test]
    fn timestamp_serializes_as_iso_string() {
        let ts = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2024-01-02T03:04:05Z\"");
    }
}
