//! The half-open availability interval shared by every stage.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// A half-open interval `[start, end)` during which a user is free.
///
/// Always non-empty: [`Availability::new`] refuses `start >= end`, so a
/// zero-length interval can never be materialized. Intervals order by start
/// (then end) and serialize as `{"start_date", "end_date"}` in UTC RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Availability {
    #[serde(rename = "start_date", serialize_with = "serialize_utc")]
    start: DateTime<Utc>,
    #[serde(rename = "end_date", serialize_with = "serialize_utc")]
    end: DateTime<Utc>,
}

impl Availability {
    /// Build an interval, or `None` when it would be empty.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

impl PartialOrd for Availability {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Availability {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

fn serialize_utc<S: Serializer>(
    instant: &DateTime<Utc>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&instant.to_rfc3339())
}

