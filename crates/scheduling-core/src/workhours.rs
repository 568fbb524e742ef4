//! Clip free gaps to a user's daily working hours.
//!
//! A gap may span several local calendar days. Each day contributes the
//! overlap between the gap and that day's working window, computed in the
//! user's timezone and emitted in UTC. Days are stepped on the civil
//! calendar, so a DST change moves the window's UTC offset, not its
//! wall-clock position.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::trace;

use crate::availability::Availability;
use crate::dst::resolve_local;
use crate::freebusy::AvailabilityPolicy;
use crate::model::WorkingHours;

/// Records only the parts of each gap that fall inside working hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkHourAvailabilityPolicy {
    pub working_hours: WorkingHours,
    pub time_zone: Tz,
}

impl WorkHourAvailabilityPolicy {
    pub fn new(working_hours: WorkingHours, time_zone: Tz) -> Self {
        Self {
            working_hours,
            time_zone,
        }
    }
}

impl AvailabilityPolicy for WorkHourAvailabilityPolicy {
    fn add_availability(
        &self,
        availabilities: &mut Vec<Availability>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) {
        add_work_hour_availability(
            availabilities,
            start,
            end,
            &self.working_hours,
            &self.time_zone,
        );
    }
}

/// Split `[gap_start, gap_end)` into per-day pieces inside working hours.
///
/// The first candidate window is on `gap_start`'s local date. Every returned
/// interval lies within a single local day's window; days whose window
/// misses the gap contribute nothing.
pub fn clip_to_working_hours(
    gap_start: DateTime<Utc>,
    gap_end: DateTime<Utc>,
    working_hours: &WorkingHours,
    time_zone: &Tz,
) -> Vec<Availability> {
    let mut availabilities = Vec::new();
    add_work_hour_availability(
        &mut availabilities,
        gap_start,
        gap_end,
        working_hours,
        time_zone,
    );
    availabilities
}

fn add_work_hour_availability(
    availabilities: &mut Vec<Availability>,
    gap_start: DateTime<Utc>,
    gap_end: DateTime<Utc>,
    working_hours: &WorkingHours,
    time_zone: &Tz,
) {
    let mut day = gap_start.with_timezone(time_zone).date_naive();

    loop {
        let local_start = resolve_local(time_zone, day.and_time(working_hours.start()));
        let window_start = local_start.with_timezone(&Utc);
        if window_start >= gap_end {
            break;
        }

        // A date the zone skips entirely resolves into the following day.
        if local_start.date_naive() == day {
            let window_end =
                resolve_local(time_zone, day.and_time(working_hours.end())).with_timezone(&Utc);

            let clipped_start = window_start.max(gap_start);
            let clipped_end = window_end.min(gap_end);
            if let Some(availability) = Availability::new(clipped_start, clipped_end) {
                trace!(
                    %day,
                    start = %clipped_start,
                    minutes = availability.duration_minutes(),
                    "work-hour availability"
                );
                availabilities.push(availability);
            }
        }

        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
}
