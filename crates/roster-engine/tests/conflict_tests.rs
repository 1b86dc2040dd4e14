//! Tests for busy-interval conflict detection.

mod common;

use common::{utc, window};
use roster_engine::conflict::has_conflict;
use roster_engine::{BusyInterval, RosterError};

#[test]
fn overlapping_busy_interval_conflicts() {
    // Slot 09:00-09:30, busy 09:15-09:45.
    let busy = vec![window(16, (9, 15), (9, 45))];

    assert!(has_conflict(&busy, utc(16, 9, 0), 30).unwrap());
}

#[test]
fn busy_interval_inside_the_slot_conflicts() {
    let busy = vec![window(16, (9, 10), (9, 20))];

    assert!(has_conflict(&busy, utc(16, 9, 0), 30).unwrap());
}

#[test]
fn busy_interval_ending_at_slot_start_is_not_a_conflict() {
    let busy = vec![window(16, (8, 0), (9, 0))];

    assert!(
        !has_conflict(&busy, utc(16, 9, 0), 30).unwrap(),
        "adjacent blocks do not conflict"
    );
}

#[test]
fn busy_interval_starting_at_slot_end_is_not_a_conflict() {
    let busy = vec![window(16, (9, 30), (10, 0))];

    assert!(!has_conflict(&busy, utc(16, 9, 0), 30).unwrap());
}

#[test]
fn empty_busy_list_never_conflicts() {
    assert!(!has_conflict(&[], utc(16, 9, 0), 30).unwrap());
}

#[test]
fn slot_length_decides_the_verdict() {
    // Busy 09:35-09:40: outside a 30-minute slot from 09:00, inside a
    // 45-minute one.
    let busy = vec![window(16, (9, 35), (9, 40))];

    assert!(!has_conflict(&busy, utc(16, 9, 0), 30).unwrap());
    assert!(has_conflict(&busy, utc(16, 9, 0), 45).unwrap());
}

#[test]
fn negative_slot_length_is_an_error() {
    let err = has_conflict(&[], utc(16, 9, 0), -15).unwrap_err();

    assert!(matches!(err, RosterError::ConflictCheck(_)));
}

#[test]
fn inverted_busy_interval_is_an_error() {
    let busy = vec![BusyInterval {
        start: utc(16, 10, 0),
        end: utc(16, 9, 0),
    }];

    let err = has_conflict(&busy, utc(16, 9, 0), 30).unwrap_err();

    assert!(matches!(err, RosterError::ConflictCheck(_)));
}
