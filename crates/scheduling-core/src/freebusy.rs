//! Compute free time from a user's busy events.
//!
//! A single forward sweep over events sorted by start time: overlapping or
//! contained events are absorbed into the current busy block, and every gap
//! between busy blocks is handed to an [`AvailabilityPolicy`] which decides
//! what (if anything) to record for it.

use chrono::{DateTime, Utc};

use crate::availability::Availability;
use crate::model::Event;

/// Strategy for turning a free gap into availabilities.
///
/// Chosen once per request and applied to every gap the sweep finds.
pub trait AvailabilityPolicy {
    /// Append the availabilities for the free gap `[start, end)`.
    ///
    /// Implementations only append; they never edit what is already there.
    fn add_availability(
        &self,
        availabilities: &mut Vec<Availability>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    );
}

/// Records each gap as-is, ignoring working hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawAvailabilityPolicy;

impl AvailabilityPolicy for RawAvailabilityPolicy {
    fn add_availability(
        &self,
        availabilities: &mut Vec<Availability>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) {
        availabilities.extend(Availability::new(start, end));
    }
}

/// Find a user's availability within `[range_start, range_end)`.
///
/// `events` must be sorted ascending by start and each must overlap the
/// range; neither is checked. Overlapping and contained busy periods are
/// merged without emitting anything. Gaps come out ascending and
/// non-overlapping, and each is passed through `policy`.
pub fn find_availability<P: AvailabilityPolicy + ?Sized>(
    events: &[Event],
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
    policy: &P,
) -> Vec<Availability> {
    let mut availabilities = Vec::new();
    let mut cursor = range_start;

    for event in events {
        if event.start <= cursor {
            cursor = cursor.max(event.end);
            continue;
        }

        policy.add_availability(&mut availabilities, cursor, event.start);
        cursor = event.end;
    }

    // Trailing gap after the last busy period.
    if cursor < range_end {
        policy.add_availability(&mut availabilities, cursor, range_end);
    }

    availabilities
}

/// Free gaps with no working-hour clipping.
pub fn find_free_gaps(
    events: &[Event],
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
) -> Vec<Availability> {
    find_availability(events, range_start, range_end, &RawAvailabilityPolicy)
}
