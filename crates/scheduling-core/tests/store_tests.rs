//! Tests for loading and querying the user database.

use chrono::{NaiveTime, TimeZone, Utc};
use scheduling_core::{Database, SchedulingError, WorkingHours};

const DB_JSON: &str = r#"[
  {
    "user_id": 1,
    "working_hours": { "start": "09:00", "end": "17:30" },
    "time_zone": "America/New_York",
    "events": [
      { "id": 2, "title": "Lunch", "start": "2019-01-01T17:00:00+00:00", "end": "2019-01-01T18:00:00+00:00" },
      { "id": 1, "title": "Standup", "start": "2019-01-01T14:00:00+0000", "end": "2019-01-01T14:15:00+0000" },
      { "id": 3, "title": "Next day", "start": "2019-01-02T14:00:00Z", "end": "2019-01-02T15:00:00Z" }
    ]
  },
  {
    "user_id": 2,
    "working_hours": { "start": "08:00", "end": "16:00" },
    "time_zone": "UTC",
    "events": []
  }
]"#;

fn db() -> Database {
    Database::from_json_str(DB_JSON).unwrap()
}

// ── Loading ─────────────────────────────────────────────────────────────────

#[test]
fn loads_users_with_parsed_fields() {
    let db = db();
    let user = db.get_user(1).unwrap();

    assert_eq!(db.len(), 2);
    assert_eq!(user.time_zone, chrono_tz::America::New_York);
    assert_eq!(
        user.working_hours,
        WorkingHours::new(
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(17, 30, 0).unwrap()
        )
        .unwrap()
    );
}

#[test]
fn events_are_sorted_by_start_on_load() {
    let db = db();
    let ids: Vec<u64> = db.get_user(1).unwrap().events.iter().map(|e| e.id).collect();

    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn users_are_listed_by_id() {
    let db = db();
    let ids: Vec<u64> = db.users().iter().map(|u| u.id).collect();

    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn from_file_reads_json() {
    let path = std::env::temp_dir().join("scheduling-core-store-test.json");
    std::fs::write(&path, DB_JSON).unwrap();

    let db = Database::from_file(&path).unwrap();

    assert_eq!(db.len(), 2);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Database::from_file("/nonexistent/scheduling/db.json").unwrap_err();

    assert!(matches!(err, SchedulingError::Io(_)));
}

#[test]
fn malformed_json_is_rejected() {
    let err = Database::from_json_str("{ not json").unwrap_err();

    assert!(matches!(err, SchedulingError::Json(_)));
}

#[test]
fn invalid_timezone_is_rejected() {
    let json = r#"[{"user_id": 1, "working_hours": {"start": "09:00", "end": "17:00"},
                    "time_zone": "Mars/Olympus_Mons", "events": []}]"#;

    let err = Database::from_json_str(json).unwrap_err();

    assert!(matches!(err, SchedulingError::InvalidTimezone(ref tz) if tz == "Mars/Olympus_Mons"));
}

#[test]
fn overnight_working_hours_are_rejected() {
    let json = r#"[{"user_id": 1, "working_hours": {"start": "22:00", "end": "06:00"},
                    "time_zone": "UTC", "events": []}]"#;

    let err = Database::from_json_str(json).unwrap_err();

    assert!(matches!(err, SchedulingError::InvalidWorkingHours(_)));
}

#[test]
fn malformed_working_hours_are_rejected() {
    let json = r#"[{"user_id": 1, "working_hours": {"start": "9am", "end": "17:00"},
                    "time_zone": "UTC", "events": []}]"#;

    assert!(matches!(
        Database::from_json_str(json).unwrap_err(),
        SchedulingError::InvalidWorkingHours(_)
    ));
}

#[test]
fn event_ending_before_it_starts_is_rejected() {
    let json = r#"[{"user_id": 1, "working_hours": {"start": "09:00", "end": "17:00"},
                    "time_zone": "UTC",
                    "events": [{"id": 1, "title": "Backwards",
                                "start": "2019-01-01T12:00:00Z", "end": "2019-01-01T11:00:00Z"}]}]"#;

    assert!(matches!(
        Database::from_json_str(json).unwrap_err(),
        SchedulingError::Store(_)
    ));
}

// ── Lookups ─────────────────────────────────────────────────────────────────

#[test]
fn unknown_user_is_not_found() {
    let err = db().get_user(42).unwrap_err();

    assert!(matches!(err, SchedulingError::UserNotFound(42)));
    assert_eq!(err.status(), 404);
    assert_eq!(err.to_string(), "User id 42 does not exist");
}

#[test]
fn user_events_are_filtered_to_the_range() {
    let db = db();
    let start = Utc.with_ymd_and_hms(2019, 1, 1, 14, 10, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2019, 1, 1, 17, 0, 0).unwrap();

    // Standup overlaps the start; Lunch starts exactly at the end and is excluded.
    let ids: Vec<u64> = db
        .get_user_events(1, start, end)
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();

    assert_eq!(ids, vec![1]);
}

#[test]
fn user_events_for_unknown_user_is_not_found() {
    let start = Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2019, 1, 2, 0, 0, 0).unwrap();

    assert!(matches!(
        db().get_user_events(7, start, end).unwrap_err(),
        SchedulingError::UserNotFound(7)
    ));
}
