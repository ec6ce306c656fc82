//! Tests for per-minute free/busy maps and run extraction.

use std::collections::HashSet;

use slot_engine::{Event, MinuteMap, TimeRange};

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::from_start_end(start, end).unwrap()
}

fn event(name: &str, start: u32, end: u32, attendees: &[&str]) -> Event {
    Event::new(name, range(start, end), attendees)
}

fn filter(attendees: &[&str]) -> HashSet<String> {
    attendees.iter().map(|a| a.to_string()).collect()
}

#[test]
fn empty_filter_leaves_the_whole_day_free() {
    let events = vec![event("all-day", 0, 1440, &["ana"])];
    let map = MinuteMap::free_for(&events, &filter(&[]));
    assert_eq!(map.free_runs(0), vec![range(0, 1440)]);
}

#[test]
fn relevant_event_blocks_its_minutes() {
    let events = vec![event("standup", 600, 660, &["ana"])];
    let map = MinuteMap::free_for(&events, &filter(&["ana"]));
    assert_eq!(map.free_runs(30), vec![range(0, 600), range(660, 1440)]);
}

#[test]
fn unrelated_events_are_ignored() {
    let events = vec![event("standup", 600, 660, &["bo"])];
    let map = MinuteMap::free_for(&events, &filter(&["ana"]));
    assert_eq!(map.free_runs(30), vec![range(0, 1440)]);
}

#[test]
fn one_shared_attendee_is_enough_to_block() {
    let events = vec![event("review", 600, 660, &["bo", "ana", "cal"])];
    let map = MinuteMap::free_for(&events, &filter(&["ana"]));
    assert_eq!(map.free_runs(30), vec![range(0, 600), range(660, 1440)]);
}

#[test]
fn overlapping_events_compound_idempotently() {
    let events = vec![
        event("a", 540, 600, &["ana"]),
        event("a again", 540, 600, &["ana"]),
        event("b", 570, 630, &["ana"]),
    ];
    let map = MinuteMap::free_for(&events, &filter(&["ana"]));
    assert_eq!(map.free_runs(30), vec![range(0, 540), range(630, 1440)]);
}

#[test]
fn runs_shorter_than_min_duration_are_dropped() {
    // Free gap of 59 minutes between the two events.
    let events = vec![
        event("morning", 0, 600, &["ana"]),
        event("afternoon", 659, 1440, &["ana"]),
    ];
    let map = MinuteMap::free_for(&events, &filter(&["ana"]));
    assert!(map.free_runs(60).is_empty());
    assert_eq!(map.free_runs(59), vec![range(600, 659)]);
}

#[test]
fn run_touching_end_of_day_is_flushed() {
    let events = vec![event("early", 0, 60, &["ana"])];
    let map = MinuteMap::free_for(&events, &filter(&["ana"]));
    assert_eq!(map.free_runs(30), vec![range(60, 1440)]);
}

#[test]
fn fully_busy_day_has_no_runs() {
    let events = vec![event("all-day", 0, 1440, &["ana"])];
    let map = MinuteMap::free_for(&events, &filter(&["ana"]));
    assert!(map.free_runs(0).is_empty());
}

#[test]
fn intersect_keeps_minutes_free_on_both_sides() {
    let mut map = MinuteMap::from_free_ranges(&[range(0, 600)]);
    map.intersect(&MinuteMap::from_free_ranges(&[range(300, 900)]));
    assert_eq!(map.free_runs(0), vec![range(300, 600)]);
}

#[test]
fn adjacent_input_ranges_merge_into_one_run() {
    let map = MinuteMap::from_free_ranges(&[range(0, 300), range(300, 600)]);
    assert_eq!(map.free_runs(0), vec![range(0, 600)]);
}

#[test]
fn disjoint_intersection_is_empty() {
    let mut map = MinuteMap::from_free_ranges(&[range(0, 300)]);
    map.intersect(&MinuteMap::from_free_ranges(&[range(600, 900)]));
    assert!(map.free_runs(0).is_empty());
}
