//! Timeline scheduler tests

use esg_advisor_engine::timeline::Timeline;

use super::common::*;

#[test]
fn events_fire_in_offset_order() {
    let mut timeline = Timeline::new();
    timeline.schedule(ms(300), "c");
    timeline.schedule(ms(100), "a");
    timeline.schedule(ms(200), "b");

    assert_eq!(timeline.advance_to(ms(300)), vec!["a", "b", "c"]);
}

#[test]
fn only_due_events_fire() {
    let mut timeline = Timeline::new();
    timeline.schedule(ms(100), "a");
    timeline.schedule(ms(200), "b");

    assert_eq!(timeline.advance_to(ms(150)), vec!["a"]);
    assert_eq!(timeline.pending(), 1);
    assert_eq!(timeline.advance_to(ms(200)), vec!["b"]);
    assert_eq!(timeline.pending(), 0);
}

#[test]
fn events_fire_exactly_once() {
    let mut timeline = Timeline::new();
    timeline.schedule(ms(100), "a");

    assert_eq!(timeline.advance_to(ms(100)), vec!["a"]);
    assert!(timeline.advance_to(ms(500)).is_empty());
}

#[test]
fn equal_offsets_fire_in_insertion_order() {
    let mut timeline = Timeline::new();
    timeline.schedule(ms(100), "first");
    timeline.schedule(ms(100), "second");
    timeline.schedule(ms(100), "third");

    assert_eq!(
        timeline.advance_to(ms(100)),
        vec!["first", "second", "third"]
    );
}

#[test]
fn clear_cancels_everything_pending() {
    let mut timeline = Timeline::new();
    timeline.schedule(ms(100), "a");
    timeline.schedule(ms(200), "b");
    timeline.clear();

    assert_eq!(timeline.pending(), 0);
    assert!(timeline.advance_to(secs(10)).is_empty());
}

#[test]
fn advancing_to_an_earlier_reading_fires_nothing() {
    let mut timeline = Timeline::new();
    timeline.schedule(ms(500), "a");

    assert!(timeline.advance_to(ms(0)).is_empty());
    assert_eq!(timeline.pending(), 1);
}
