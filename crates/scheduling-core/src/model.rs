//! Users, their busy events and their daily working hours.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::error::{Result, SchedulingError};

/// A busy period on a user's calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: u64,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Event {
    /// Whether the event overlaps the half-open range `[range_start, range_end)`.
    pub fn overlaps(&self, range_start: DateTime<Utc>, range_end: DateTime<Utc>) -> bool {
        self.start < range_end && self.end > range_start
    }
}

/// A recurring daily window, `start..end` in local wall-clock time.
///
/// Always a same-day window: overnight shifts are not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingHours {
    start: NaiveTime,
    end: NaiveTime,
}

impl WorkingHours {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if start >= end {
            return Err(SchedulingError::InvalidWorkingHours(format!(
                "start {} must be before end {}",
                start.format("%H:%M"),
                end.format("%H:%M")
            )));
        }
        Ok(Self { start, end })
    }

    /// Build from `(hour, minute)` pairs.
    pub fn from_hm(start: (u32, u32), end: (u32, u32)) -> Result<Self> {
        Self::new(hm(start)?, hm(end)?)
    }

    /// Parse `"HH:MM"` strings, e.g. `WorkingHours::parse("09:00", "17:30")`.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_hm(start)?, parse_hm(end)?)
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }
}

impl fmt::Display for WorkingHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

fn hm((hour, minute): (u32, u32)) -> Result<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
        SchedulingError::InvalidWorkingHours(format!("{:02}:{:02} is not a time of day", hour, minute))
    })
}

fn parse_hm(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| SchedulingError::InvalidWorkingHours(format!("expected HH:MM, got '{}'", s)))
}

/// Parse an IANA timezone name such as `"America/New_York"`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    Tz::from_str(name).map_err(|_| SchedulingError::InvalidTimezone(name.to_string()))
}

/// A calendar owner.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    pub working_hours: WorkingHours,
    pub time_zone: Tz,
    /// Ascending by start.
    pub events: Vec<Event>,
}
