//! Tests for the event countdown arithmetic

use chrono::{Duration, TimeZone, Utc};

use bountyboard::core::models::{TimerState, TimerStatus};

fn start() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
}

#[test]
fn test_running_countdown() {
    let state = TimerState::started(45, start());
    let now = start() + Duration::seconds(600);

    assert_eq!(state.status, TimerStatus::Running);
    assert_eq!(state.remaining_seconds(now), 45 * 60 - 600);
    assert_eq!(state.elapsed_seconds(now), 600);
    assert!(state.is_active(now));
}

#[test]
fn test_expired_countdown() {
    let state = TimerState::started(1, start());
    let now = start() + Duration::seconds(61);

    assert_eq!(state.remaining_seconds(now), 0);
    assert!(!state.is_active(now));
    assert_eq!(state.elapsed_seconds(now), 60);
}

#[test]
fn test_stopped_timer_is_closed() {
    let state = TimerState::started(30, start()).stopped();
    let now = start() + Duration::seconds(5);

    assert_eq!(state.status, TimerStatus::Stopped);
    assert_eq!(state.start_time, Some(start()));
    assert_eq!(state.duration_minutes, 30);
    assert_eq!(state.remaining_seconds(now), 0);
    assert!(!state.is_active(now));
}

#[test]
fn test_reset_state() {
    let state = TimerState::default();
    assert_eq!(state.status, TimerStatus::Stopped);
    assert!(state.start_time.is_none());
    assert_eq!(state.duration_minutes, 0);
    assert!(!state.is_active(start()));
}

#[test]
fn test_clock_before_start_counts_full_duration() {
    let state = TimerState::started(10, start());
    let now = start() - Duration::seconds(30);
    assert_eq!(state.remaining_seconds(now), 600);
    assert_eq!(state.elapsed_seconds(now), 0);
}
