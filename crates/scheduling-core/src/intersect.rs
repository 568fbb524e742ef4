//! Intersect the availability of several users.
//!
//! Each user's list is sorted and non-overlapping. A cursor walks each list;
//! at every step the interval with the earliest end is the only one that can
//! close the current common window, so it is emitted (clipped to the latest
//! start seen so far) and its list advances. The walk stops as soon as any
//! list runs out, because nothing after that point can be common to all.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use chrono::{DateTime, Utc};

use crate::availability::Availability;

/// Compute the intervals common to every list in `lists`.
///
/// Every inner list must be sorted ascending by start and internally
/// non-overlapping. The result is ascending and non-overlapping; touching
/// windows are kept separate. An empty `lists`, or any empty inner list,
/// yields an empty result.
///
/// Runs in O(M log N) for M intervals across N lists.
pub fn intersect_availabilities(lists: &[Vec<Availability>]) -> Vec<Availability> {
    let mut availabilities = Vec::new();

    if lists.is_empty() || lists.iter().any(|list| list.is_empty()) {
        return availabilities;
    }

    // Min-heap of (current end, list index); `positions[i]` is list i's cursor.
    let mut positions = vec![0usize; lists.len()];
    let mut heap: BinaryHeap<Reverse<(DateTime<Utc>, usize)>> = lists
        .iter()
        .enumerate()
        .map(|(index, list)| Reverse((list[0].end(), index)))
        .collect();
    let mut lower_bound = lists
        .iter()
        .map(|list| list[0].start())
        .max()
        .unwrap_or_default();

    while let Some(Reverse((candidate_end, index))) = heap.pop() {
        availabilities.extend(Availability::new(lower_bound, candidate_end));

        positions[index] += 1;
        let Some(next) = lists[index].get(positions[index]) else {
            break;
        };

        lower_bound = lower_bound.max(next.start());
        heap.push(Reverse((next.end(), index)));
    }

    availabilities
}
