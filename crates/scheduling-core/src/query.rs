//! Availability requests: parameter validation and orchestration.
//!
//! A request names one or more users and a date range. Each user's events
//! are turned into availability (clipped to working hours unless the request
//! includes non-working hours), and the users' lists are intersected.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::availability::Availability;
use crate::datetime::parse_datetime;
use crate::error::{Result, SchedulingError};
use crate::freebusy::{find_availability, AvailabilityPolicy, RawAvailabilityPolicy};
use crate::intersect::intersect_availabilities;
use crate::model::User;
use crate::store::Database;
use crate::workhours::WorkHourAvailabilityPolicy;

/// A validated availability request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityRequest {
    pub user_ids: Vec<u64>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub include_non_working_hours: bool,
}

impl AvailabilityRequest {
    /// Build a request from already-typed values.
    ///
    /// # Errors
    /// `MissingUserIds` when `user_ids` is empty, `InvalidRange` unless
    /// `start_date < end_date`.
    pub fn new(
        user_ids: Vec<u64>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        include_non_working_hours: bool,
    ) -> Result<Self> {
        if user_ids.is_empty() {
            return Err(SchedulingError::MissingUserIds);
        }
        if start_date >= end_date {
            return Err(SchedulingError::InvalidRange);
        }
        Ok(Self {
            user_ids,
            start_date,
            end_date,
            include_non_working_hours,
        })
    }

    /// Validate raw request parameters.
    ///
    /// Checks run in order: user ids present and numeric, `start_date`
    /// parses, `end_date` parses, then `start_date < end_date`. Non-working
    /// hours are included only when the flag is exactly `"true"`.
    pub fn parse<S: AsRef<str>>(
        user_ids: &[S],
        start_date: Option<&str>,
        end_date: Option<&str>,
        include_non_working_hours: Option<&str>,
    ) -> Result<Self> {
        if user_ids.is_empty() {
            return Err(SchedulingError::MissingUserIds);
        }
        let user_ids = user_ids
            .iter()
            .map(|id| {
                let id = id.as_ref();
                id.trim()
                    .parse::<u64>()
                    .map_err(|_| SchedulingError::InvalidUserId(id.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        let start_date = parse_date_param("start_date", start_date)?;
        let end_date = parse_date_param("end_date", end_date)?;

        Self::new(
            user_ids,
            start_date,
            end_date,
            include_non_working_hours == Some("true"),
        )
    }
}

fn parse_date_param(field: &'static str, value: Option<&str>) -> Result<DateTime<Utc>> {
    let value = value.unwrap_or_default();
    parse_datetime(value).ok_or_else(|| SchedulingError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Compute the availability common to every user in `request`.
///
/// Users are processed in request order. An unknown user fails with
/// `UserNotFound`. As soon as one user has no availability at all the
/// result is empty and the remaining users are not computed. A single
/// user's list is returned unmodified.
pub fn get_availability(db: &Database, request: &AvailabilityRequest) -> Result<Vec<Availability>> {
    if request.include_non_working_hours {
        debug!(users = ?request.user_ids, "availability including non-working hours");
        availability_with_policy(db, request, |_| RawAvailabilityPolicy)
    } else {
        debug!(users = ?request.user_ids, "availability within working hours");
        availability_with_policy(db, request, |user| {
            WorkHourAvailabilityPolicy::new(user.working_hours, user.time_zone)
        })
    }
}

fn availability_with_policy<P, F>(
    db: &Database,
    request: &AvailabilityRequest,
    policy_for: F,
) -> Result<Vec<Availability>>
where
    P: AvailabilityPolicy,
    F: Fn(&User) -> P,
{
    let mut user_availabilities = Vec::with_capacity(request.user_ids.len());

    for &user_id in &request.user_ids {
        let events = db.get_user_events(user_id, request.start_date, request.end_date)?;
        let policy = policy_for(db.get_user(user_id)?);
        let availability =
            find_availability(&events, request.start_date, request.end_date, &policy);

        if availability.is_empty() {
            debug!(user_id, "user has no availability in range");
            return Ok(Vec::new());
        }
        user_availabilities.push(availability);
    }

    if user_availabilities.len() == 1 {
        return Ok(user_availabilities.pop().unwrap_or_default());
    }

    Ok(intersect_availabilities(&user_availabilities))
}

/// Successful response body: `{"data": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityResponse {
    pub data: Vec<Availability>,
}

/// Failure response body: `{"message": "..."}`, with its status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip)]
    pub status: u16,
}

impl From<&SchedulingError> for ErrorResponse {
    fn from(err: &SchedulingError) -> Self {
        Self {
            message: err.to_string(),
            status: err.status(),
        }
    }
}

/// Validate, compute and render in one step.
///
/// Returns the response body for either outcome, so the caller only decides
/// how to deliver it.
pub fn respond(
    db: &Database,
    user_ids: &[String],
    start_date: Option<&str>,
    end_date: Option<&str>,
    include_non_working_hours: Option<&str>,
) -> std::result::Result<AvailabilityResponse, ErrorResponse> {
    AvailabilityRequest::parse(user_ids, start_date, end_date, include_non_working_hours)
        .and_then(|request| get_availability(db, &request))
        .map(|data| AvailabilityResponse { data })
        .map_err(|err| ErrorResponse::from(&err))
}
