//! Resolve local wall-clock times around DST transitions.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

/// Map a local wall-clock time in `tz` to a single instant.
///
/// - Repeated times (fall back) resolve to the earlier instant.
/// - Skipped times (spring forward) are read with the UTC offset in force
///   just before the transition, which lands the same distance past the gap,
///   e.g. 02:30 on a New York spring-forward day becomes 03:30 EDT.
pub fn resolve_local(tz: &Tz, local: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            // Transitions are never less than a day apart.
            let before = tz.offset_from_utc_datetime(&(local - Duration::days(1)));
            let utc = local - Duration::seconds(i64::from(before.fix().local_minus_utc()));
            Utc.from_utc_datetime(&utc).with_timezone(tz)
        }
    }
}
