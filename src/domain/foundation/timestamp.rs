//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Months, Utc};
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

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Creates a new timestamp by adding calendar months.
    ///
    /// Day-of-month is clamped when the target month is shorter
    /// (Jan 31 + 1 month = Feb 28/29).
    pub fn add_calendar_months(&self, months: u32) -> Self {
        Self(self.0 + Months::new(months))
    }

    /// Creates a new timestamp by subtracting calendar months.
    pub fn minus_calendar_months(&self, months: u32) -> Self {
        Self(self.0 - Months::new(months))
    }

    /// Returns the number of whole days until `other`, rounded up.
    ///
    /// Returns 0 when `other` is not in the future.
    pub fn days_until(&self, other: &Timestamp) -> i64 {
        let secs = other.0.signed_duration_since(self.0).num_seconds();
        if secs <= 0 {
            0
        } else {
            (secs + 86_399) / 86_400
        }
    }

    /// Creates a new timestamp by adding the specified number of days.
    ///
    /// Negative values subtract days.
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + chrono::Duration::days(days))
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
    use chrono::Datelike;

    fn ts(rfc3339: &str) -> Timestamp {
        let dt = DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc);
        Timestamp::from_datetime(dt)
    }

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let t = Timestamp::now();
        let after = Utc::now();

        assert!(t.as_datetime() >= &before);
        assert!(t.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_is_before_and_after_work() {
        let t1 = ts("2024-01-15T10:00:00Z");
        let t2 = ts("2024-01-15T11:00:00Z");

        assert!(t1.is_before(&t2));
        assert!(t2.is_after(&t1));
        assert!(!t2.is_before(&t1));
    }

    #[test]
    fn add_calendar_months_advances_by_month_not_thirty_days() {
        let t = ts("2024-01-15T10:00:00Z");
        let later = t.add_calendar_months(6);

        assert_eq!(later.as_datetime().year(), 2024);
        assert_eq!(later.as_datetime().month(), 7);
        assert_eq!(later.as_datetime().day(), 15);
    }

    #[test]
    fn add_calendar_months_clamps_short_months() {
        let t = ts("2024-01-31T00:00:00Z");
        let later = t.add_calendar_months(1);

        // 2024 is a leap year
        assert_eq!(later.as_datetime().month(), 2);
        assert_eq!(later.as_datetime().day(), 29);
    }

    #[test]
    fn minus_calendar_months_reverses_addition_for_mid_month_days() {
        let t = ts("2024-07-15T10:00:00Z");
        let earlier = t.minus_calendar_months(6);

        assert_eq!(earlier.as_datetime().month(), 1);
        assert_eq!(earlier.as_datetime().day(), 15);
    }

    #[test]
    fn days_until_rounds_partial_days_up() {
        let t1 = ts("2024-01-15T10:00:00Z");
        let t2 = ts("2024-01-17T09:00:00Z");

        // 1 day 23 hours -> 2 whole days
        assert_eq!(t1.days_until(&t2), 2);
    }

    #[test]
    fn days_until_is_zero_for_past_targets() {
        let t1 = ts("2024-01-15T10:00:00Z");
        let t2 = ts("2024-01-10T10:00:00Z");

        assert_eq!(t1.days_until(&t2), 0);
    }

    #[test]
    fn add_days_moves_forward_and_back() {
        let t = ts("2024-01-15T10:00:00Z");
        assert_eq!(t.add_days(5).as_datetime().day(), 20);
        assert_eq!(t.add_days(-5).as_datetime().day(), 10);
    }

    #[test]
    fn timestamp_serializes_to_json() {
        let t = ts("2024-01-15T10:30:00Z");
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("2024-01-15"));
    }

    #[test]
    fn timestamp_deserializes_from_json() {
        let t: Timestamp = serde_json::from_str("\"2024-01-15T10:30:00Z\"").unwrap();
        assert_eq!(t.as_datetime().year(), 2024);
    }

    #[test]
    fn timestamp_ordering_works() {
        let t1 = ts("2024-01-15T10:00:00Z");
        let t2 = ts("2024-02-15T10:00:00Z");
        assert!(t1 < t2);
    }
}
