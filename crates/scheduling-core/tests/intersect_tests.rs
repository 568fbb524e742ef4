//! Tests for multi-user availability intersection.

use chrono::{DateTime, TimeZone, Utc};
use scheduling_core::{intersect_availabilities, Availability};

/// 2019-01-01 `[start_hour:00, end_hour:00)` UTC.
fn slot(start_hour: u32, end_hour: u32) -> Availability {
    Availability::new(at(start_hour), at(end_hour)).unwrap()
}

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 1, 1, hour, 0, 0).unwrap()
}

#[test]
fn fully_intersecting_availabilities_are_preserved() {
    let user1 = vec![slot(11, 15)];
    let user2 = vec![slot(11, 15)];

    assert_eq!(intersect_availabilities(&[user1, user2]), vec![slot(11, 15)]);
}

#[test]
fn disjoint_availabilities_have_no_intersection() {
    let user1 = vec![slot(11, 15)];
    let user2 = vec![slot(18, 22)];

    assert!(intersect_availabilities(&[user1, user2]).is_empty());
}

#[test]
fn overlap_keeps_only_the_common_part() {
    let user1 = vec![slot(11, 15)];
    let user2 = vec![slot(13, 22)];

    assert_eq!(intersect_availabilities(&[user1, user2]), vec![slot(13, 15)]);
}

#[test]
fn unbalanced_lists() {
    let user1 = vec![slot(11, 15)];
    let user2 = vec![slot(8, 12), slot(13, 22)];

    assert_eq!(
        intersect_availabilities(&[user1, user2]),
        vec![slot(11, 12), slot(13, 15)]
    );
}

#[test]
fn touching_windows_stay_separate() {
    let user1 = vec![slot(9, 12), slot(12, 15)];
    let user2 = vec![slot(8, 18)];

    assert_eq!(
        intersect_availabilities(&[user1, user2]),
        vec![slot(9, 12), slot(12, 15)]
    );
}

#[test]
fn adjacent_but_not_overlapping_yields_nothing() {
    let user1 = vec![slot(9, 12)];
    let user2 = vec![slot(12, 15)];

    assert!(intersect_availabilities(&[user1, user2]).is_empty());
}

#[test]
fn three_users() {
    let user1 = vec![slot(8, 12), slot(13, 18)];
    let user2 = vec![slot(9, 11), slot(14, 20)];
    let user3 = vec![slot(10, 16)];

    assert_eq!(
        intersect_availabilities(&[user1, user2, user3]),
        vec![slot(10, 11), slot(14, 16)]
    );
}

#[test]
fn single_list_is_returned_unchanged() {
    let user = vec![slot(8, 9), slot(10, 12), slot(12, 13), slot(15, 20)];

    assert_eq!(intersect_availabilities(&[user.clone()]), user);
}

#[test]
fn list_intersected_with_itself_is_unchanged() {
    let user = vec![slot(8, 9), slot(10, 12), slot(15, 20)];

    assert_eq!(
        intersect_availabilities(&[user.clone(), user.clone()]),
        user
    );
}

#[test]
fn empty_inputs_yield_nothing() {
    assert!(intersect_availabilities(&[]).is_empty());
    assert!(intersect_availabilities(&[vec![slot(9, 12)], vec![]]).is_empty());
}
