//! Log-meal visibility policy on top of the evaluator/navigator.
//! 2025-03-10 is a Monday; the 16:8 schedule runs 12:00–20:00 daily.

use chrono::NaiveDateTime;
use fastwin::core::visibility::{GracePolicy, should_show_primary};
use fastwin::models::override_day::{DayOverride, OverrideKind};
use fastwin::models::schedule::{ALL_DAYS_MASK, Schedule};

fn schedule_16_8() -> Schedule {
    Schedule {
        id: 1,
        name: "16:8".to_string(),
        start_minutes: 720,
        end_minutes: 1200,
        weekday_mask: ALL_DAYS_MASK,
        built_in: true,
    }
}

fn at(date: &str, time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M").unwrap()
}

fn policy(always: bool, before: f64, after: f64) -> GracePolicy {
    GracePolicy {
        always_show: always,
        show_before_hours: before,
        show_after_hours: after,
    }
}

#[test]
fn no_schedule_hides_even_with_always_show() {
    let now = at("2025-03-10", "13:00");
    assert!(!should_show_primary(&policy(true, 2.5, 2.5), None, &[], now));
    assert!(!should_show_primary(&policy(false, 2.5, 2.5), None, &[], now));
}

#[test]
fn always_show_wins_with_a_schedule_present() {
    let s = schedule_16_8();
    // Deep in the fasting night, zero grace hours: only always_show applies.
    let now = at("2025-03-10", "03:00");
    assert!(should_show_primary(&policy(true, 0.0, 0.0), Some(&s), &[], now));
    assert!(!should_show_primary(&policy(false, 0.0, 0.0), Some(&s), &[], now));
}

#[test]
fn visible_inside_the_window() {
    let s = schedule_16_8();
    let now = at("2025-03-10", "13:00");
    assert!(should_show_primary(&policy(false, 0.0, 0.0), Some(&s), &[], now));
}

#[test]
fn before_grace_period_covers_the_approach() {
    let s = schedule_16_8();
    // 10:00 is 2h before the 12:00 start.
    let now = at("2025-03-10", "10:00");
    assert!(should_show_primary(&policy(false, 2.5, 0.0), Some(&s), &[], now));
    assert!(!should_show_primary(&policy(false, 0.5, 0.0), Some(&s), &[], now));
}

#[test]
fn after_grace_period_covers_the_close() {
    let s = schedule_16_8();
    // 21:00 is 1h after the 20:00 end.
    let now = at("2025-03-10", "21:00");
    assert!(should_show_primary(&policy(false, 0.0, 2.5), Some(&s), &[], now));
    assert!(!should_show_primary(&policy(false, 0.0, 0.5), Some(&s), &[], now));
}

#[test]
fn skip_override_removes_todays_window_from_the_policy() {
    let s = schedule_16_8();
    let overrides = vec![DayOverride {
        id: 0,
        date: at("2025-03-10", "00:00").date(),
        kind: OverrideKind::Skip,
        start_minutes: None,
        end_minutes: None,
        schedule_id: None,
    }];

    // Inside what would have been the window: hidden without grace.
    let now = at("2025-03-10", "13:00");
    assert!(!should_show_primary(&policy(false, 0.0, 0.0), Some(&s), &overrides, now));

    // The before-grace now reaches toward tomorrow's window instead:
    // 23 hours until 2025-03-11 12:00, so a 24h grace shows it.
    assert!(should_show_primary(&policy(false, 24.0, 0.0), Some(&s), &overrides, now));
}
