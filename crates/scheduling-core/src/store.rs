//! Read-only user database loaded from a JSON file.
//!
//! The file holds an array of users:
//!
//! ```json
//! [
//!   {
//!     "user_id": 1,
//!     "working_hours": { "start": "09:00", "end": "17:30" },
//!     "time_zone": "America/New_York",
//!     "events": [
//!       { "id": 7, "title": "Standup", "start": "2019-01-01T14:00:00+00:00",
//!         "end": "2019-01-01T14:15:00+00:00" }
//!     ]
//!   }
//! ]
//! ```
//!
//! Everything is validated and parsed once at load time. After that the
//! database is immutable, so a shared reference (or an `Arc`) can serve any
//! number of concurrent requests.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::datetime::parse_datetime;
use crate::error::{Result, SchedulingError};
use crate::model::{parse_timezone, Event, User, WorkingHours};

#[derive(Debug, Deserialize)]
struct UserRecord {
    user_id: u64,
    working_hours: WorkingHoursRecord,
    time_zone: String,
    #[serde(default)]
    events: Vec<EventRecord>,
}

#[derive(Debug, Deserialize)]
struct WorkingHoursRecord {
    start: String,
    end: String,
}

#[derive(Debug, Deserialize)]
struct EventRecord {
    id: u64,
    #[serde(default)]
    title: String,
    start: String,
    end: String,
}

impl EventRecord {
    fn into_event(self, user_id: u64) -> Result<Event> {
        let start = parse_event_date(&self.start, self.id, user_id)?;
        let end = parse_event_date(&self.end, self.id, user_id)?;
        if end <= start {
            return Err(SchedulingError::Store(format!(
                "event {} of user {} ends before it starts",
                self.id, user_id
            )));
        }
        Ok(Event {
            id: self.id,
            title: self.title,
            start,
            end,
        })
    }
}

fn parse_event_date(value: &str, event_id: u64, user_id: u64) -> Result<DateTime<Utc>> {
    parse_datetime(value).ok_or_else(|| {
        SchedulingError::Store(format!(
            "event {} of user {} has an invalid date '{}'",
            event_id, user_id, value
        ))
    })
}

impl UserRecord {
    fn into_user(self) -> Result<User> {
        let working_hours =
            WorkingHours::parse(&self.working_hours.start, &self.working_hours.end)?;
        let time_zone = parse_timezone(&self.time_zone)?;
        let user_id = self.user_id;
        let mut events = self
            .events
            .into_iter()
            .map(|record| record.into_event(user_id))
            .collect::<Result<Vec<_>>>()?;
        events.sort_by_key(|e| (e.start, e.end));

        Ok(User {
            id: user_id,
            working_hours,
            time_zone,
            events,
        })
    }
}

/// Users keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Database {
    users: HashMap<u64, User>,
}

impl Database {
    /// Build a database from already-constructed users.
    ///
    /// Each user's events are re-sorted by start. A later user with a
    /// duplicate id replaces an earlier one.
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|mut user| {
                user.events.sort_by_key(|e| (e.start, e.end));
                (user.id, user)
            })
            .collect();
        Self { users }
    }

    /// Parse a JSON array of user records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<UserRecord> = serde_json::from_str(json)?;
        let users = records
            .into_iter()
            .map(UserRecord::into_user)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_users(users))
    }

    /// Load the database from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let db = Self::from_json_str(&content)?;
        debug!(path = %path.display(), users = db.len(), "loaded user database");
        Ok(db)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Look up a user, failing with [`SchedulingError::UserNotFound`].
    pub fn get_user(&self, user_id: u64) -> Result<&User> {
        self.users
            .get(&user_id)
            .ok_or(SchedulingError::UserNotFound(user_id))
    }

    /// A user's events overlapping `[range_start, range_end)`, ascending by start.
    pub fn get_user_events(
        &self,
        user_id: u64,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
    ) -> Result<Vec<Event>> {
        let user = self.get_user(user_id)?;
        Ok(user
            .events
            .iter()
            .filter(|event| event.overlaps(range_start, range_end))
            .cloned()
            .collect())
    }

    /// All users, ordered by id.
    pub fn users(&self) -> Vec<&User> {
        let mut users: Vec<&User> = self.users.values().collect();
        users.sort_by_key(|user| user.id);
        users
    }
}
