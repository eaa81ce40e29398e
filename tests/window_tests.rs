//! Evaluator and navigator behavior over schedules and per-day overrides.
//!
//! Fixed dates are used throughout so the weekday math is explicit:
//! 2025-03-10 is a Monday, 2025-03-09 a Sunday, 2025-03-13 a Thursday.

use chrono::{NaiveDate, NaiveDateTime};
use fastwin::core::evaluator::{is_in_window, window_text};
use fastwin::core::navigator::{
    current_window_range, day_window, next_window_start, previous_window_end,
};
use fastwin::models::override_day::{DayOverride, OverrideKind};
use fastwin::models::schedule::{ALL_DAYS_MASK, Schedule};

fn schedule_16_8() -> Schedule {
    Schedule {
        id: 1,
        name: "16:8".to_string(),
        start_minutes: 720, // 12:00
        end_minutes: 1200,  // 20:00
        weekday_mask: ALL_DAYS_MASK,
        built_in: true,
    }
}

fn schedule_with_mask(mask: u8) -> Schedule {
    Schedule {
        weekday_mask: mask,
        ..schedule_16_8()
    }
}

fn at(date: &str, time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M").unwrap()
}

fn day(date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()
}

fn eating(date: &str, start: Option<u32>, end: Option<u32>) -> DayOverride {
    DayOverride {
        id: 0,
        date: day(date),
        kind: OverrideKind::Eating,
        start_minutes: start,
        end_minutes: end,
        schedule_id: None,
    }
}

fn skip(date: &str) -> DayOverride {
    DayOverride {
        id: 0,
        date: day(date),
        kind: OverrideKind::Skip,
        start_minutes: None,
        end_minutes: None,
        schedule_id: None,
    }
}

// ---------------------------------------------------------------------------
// Evaluator
// ---------------------------------------------------------------------------

#[test]
fn inactive_weekday_without_override_is_never_in_window() {
    // Thursday-only mask (weekday 5), evaluated on a Monday.
    let s = schedule_with_mask(1 << 5);
    for time in ["00:00", "11:59", "12:00", "15:00", "20:00", "23:59"] {
        assert!(!is_in_window(&s, at("2025-03-10", time), None));
    }
}

#[test]
fn monday_13_is_in_window_for_daily_16_8() {
    let s = schedule_16_8();
    assert!(is_in_window(&s, at("2025-03-10", "13:00"), None));
    assert!(!is_in_window(&s, at("2025-03-10", "10:00"), None));
}

#[test]
fn window_bounds_are_inclusive_on_both_ends() {
    let s = schedule_16_8();
    assert!(!is_in_window(&s, at("2025-03-10", "11:59"), None));
    assert!(is_in_window(&s, at("2025-03-10", "12:00"), None));
    assert!(is_in_window(&s, at("2025-03-10", "20:00"), None));
    assert!(!is_in_window(&s, at("2025-03-10", "20:01"), None));
}

#[test]
fn eating_override_without_custom_times_uses_schedule_minutes() {
    // Mask excludes Monday entirely; the override alone activates the day.
    let s = schedule_with_mask(1 << 5);
    let ov = eating("2025-03-10", None, None);

    assert!(is_in_window(&s, at("2025-03-10", "12:00"), Some(&ov)));
    assert!(is_in_window(&s, at("2025-03-10", "20:00"), Some(&ov)));
    assert!(!is_in_window(&s, at("2025-03-10", "11:59"), Some(&ov)));
    assert_eq!(window_text(&s, Some(&ov)), "12:00–20:00");
}

#[test]
fn eating_override_with_custom_times_overrides_schedule_minutes() {
    let s = schedule_16_8();
    let ov = eating("2025-03-10", Some(600), Some(840)); // 10:00–14:00

    assert!(is_in_window(&s, at("2025-03-10", "10:00"), Some(&ov)));
    assert!(is_in_window(&s, at("2025-03-10", "14:00"), Some(&ov)));
    assert!(!is_in_window(&s, at("2025-03-10", "15:00"), Some(&ov)));
    assert_eq!(window_text(&s, Some(&ov)), "10:00–14:00");
}

#[test]
fn skip_override_wins_over_active_weekday() {
    let s = schedule_16_8();
    let ov = skip("2025-03-10");

    for time in ["00:00", "12:00", "15:00", "20:00", "23:59"] {
        assert!(!is_in_window(&s, at("2025-03-10", time), Some(&ov)));
    }

    // The rendered text is informational only: skip leaves the default.
    assert_eq!(window_text(&s, Some(&ov)), "12:00–20:00");
}

#[test]
fn sunday_eating_override_on_sunday_excluded_mask() {
    // Mask without Sunday (weekday 1).
    let s = schedule_with_mask(ALL_DAYS_MASK & !(1 << 1));
    let ov = eating("2025-03-09", None, None);

    assert!(is_in_window(&s, at("2025-03-09", "13:00"), Some(&ov)));
    assert!(!is_in_window(&s, at("2025-03-09", "21:00"), Some(&ov)));
    // Another mask-inactive Sunday without an override stays fasting.
    assert!(!is_in_window(&s, at("2025-03-16", "13:00"), None));
}

#[test]
fn window_text_is_zero_padded_24h() {
    let s = Schedule {
        start_minutes: 305, // 05:05
        end_minutes: 570,   // 09:30
        ..schedule_16_8()
    };
    assert_eq!(window_text(&s, None), "05:05–09:30");
}

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

#[test]
fn current_window_range_only_while_inside() {
    let s = schedule_16_8();

    let inside = current_window_range(&s, at("2025-03-10", "13:00"), None);
    assert_eq!(
        inside,
        Some((at("2025-03-10", "12:00"), at("2025-03-10", "20:00")))
    );

    assert_eq!(current_window_range(&s, at("2025-03-10", "10:00"), None), None);
    assert_eq!(current_window_range(&s, at("2025-03-10", "20:01"), None), None);
}

#[test]
fn next_start_is_strictly_after_now() {
    let s = schedule_16_8();

    // Before today's window: today's own start qualifies.
    assert_eq!(
        next_window_start(&s, at("2025-03-10", "10:00"), &[]),
        Some(at("2025-03-10", "12:00"))
    );

    // Inside today's window: today's start is not after now anymore.
    assert_eq!(
        next_window_start(&s, at("2025-03-10", "13:00"), &[]),
        Some(at("2025-03-11", "12:00"))
    );

    // At the exact start: strictly-after excludes it.
    assert_eq!(
        next_window_start(&s, at("2025-03-10", "12:00"), &[]),
        Some(at("2025-03-11", "12:00"))
    );
}

#[test]
fn previous_end_is_strictly_before_now() {
    let s = schedule_16_8();

    assert_eq!(
        previous_window_end(&s, at("2025-03-10", "21:00"), &[]),
        Some(at("2025-03-10", "20:00"))
    );

    // Before today's end: yesterday's end is the previous one.
    assert_eq!(
        previous_window_end(&s, at("2025-03-10", "10:00"), &[]),
        Some(at("2025-03-09", "20:00"))
    );

    // At the exact end: strictly-before excludes it.
    assert_eq!(
        previous_window_end(&s, at("2025-03-10", "20:00"), &[]),
        Some(at("2025-03-09", "20:00"))
    );
}

#[test]
fn scans_never_land_on_skip_days() {
    let s = schedule_16_8();
    let overrides = vec![skip("2025-03-11"), skip("2025-03-09")];

    assert_eq!(
        next_window_start(&s, at("2025-03-10", "13:00"), &overrides),
        Some(at("2025-03-12", "12:00"))
    );
    assert_eq!(
        previous_window_end(&s, at("2025-03-10", "10:00"), &overrides),
        Some(at("2025-03-08", "20:00"))
    );
}

#[test]
fn scans_use_eating_overrides_on_inactive_days() {
    // Thursday-only schedule, eating override with custom times on Tuesday.
    let s = schedule_with_mask(1 << 5);
    let overrides = vec![eating("2025-03-11", Some(600), Some(840))];

    assert_eq!(
        next_window_start(&s, at("2025-03-10", "09:00"), &overrides),
        Some(at("2025-03-11", "10:00"))
    );
}

#[test]
fn single_active_day_needs_the_full_scan_horizon() {
    // Thursday-only; from Thursday afternoon the next start is 7 days out,
    // which an off-by-one 7-day horizon would miss.
    let s = schedule_with_mask(1 << 5);
    assert_eq!(
        next_window_start(&s, at("2025-03-13", "13:00"), &[]),
        Some(at("2025-03-20", "12:00"))
    );
}

#[test]
fn zero_mask_without_overrides_finds_nothing() {
    let s = schedule_with_mask(0);
    assert_eq!(next_window_start(&s, at("2025-03-10", "13:00"), &[]), None);
    assert_eq!(previous_window_end(&s, at("2025-03-10", "13:00"), &[]), None);
    assert_eq!(current_window_range(&s, at("2025-03-10", "13:00"), None), None);
}

#[test]
fn navigator_and_evaluator_agree_at_the_next_start() {
    let s = schedule_16_8();
    let next = next_window_start(&s, at("2025-03-10", "10:00"), &[]).unwrap();

    // Repositioning "now" onto the found start puts us inside the window.
    assert!(is_in_window(&s, next, None));
    let (start, _end) = current_window_range(&s, next, None).unwrap();
    assert_eq!(start, next);
}

#[test]
fn dst_transition_day_keeps_wall_clock_window() {
    // 2025-03-09 is the US spring-forward date. Windows are defined in
    // minutes since local midnight, so the wall-clock bounds must not move.
    let s = schedule_16_8();
    let (start, end) = day_window(&s, day("2025-03-09"), None).unwrap();

    assert_eq!(start, at("2025-03-09", "12:00"));
    assert_eq!(end, at("2025-03-09", "20:00"));
    assert!(is_in_window(&s, at("2025-03-09", "13:00"), None));
}
