//! Window evaluator: decides whether an instant falls inside the eating
//! window of its own calendar day, and renders the window time string.
//!
//! Pure over its inputs; "now" is always an explicit parameter so callers
//! and tests inject the clock.

use crate::models::override_day::{DayOverride, OverrideKind};
use crate::models::schedule::Schedule;
use crate::utils::date::weekday_number;
use crate::utils::time::{format_minute_of_day, minute_of_day};
use chrono::NaiveDateTime;

/// Effective start/end minutes for a day, given an optional override.
/// A skip override is not a window; `window_text` still falls back to the
/// schedule defaults for it (the rendered text is informational only).
pub fn effective_minutes(schedule: &Schedule, ov: Option<&DayOverride>) -> (u32, u32) {
    match ov {
        Some(o) if o.kind == OverrideKind::Eating => (
            o.start_minutes.unwrap_or(schedule.start_minutes),
            o.end_minutes.unwrap_or(schedule.end_minutes),
        ),
        _ => (schedule.start_minutes, schedule.end_minutes),
    }
}

/// True iff `now` falls inside the eating window of its own day.
///
/// Resolution order:
/// - skip override ⇒ false, even on a mask-active weekday
/// - eating override ⇒ custom-or-default minutes, weekday mask ignored
/// - no override ⇒ weekday mask gate, then schedule minutes
///
/// Both bounds are inclusive: the boundary minute itself counts as in
/// window, everywhere in the system.
pub fn is_in_window(schedule: &Schedule, now: NaiveDateTime, ov: Option<&DayOverride>) -> bool {
    if let Some(o) = ov {
        if o.kind.is_skip() {
            return false;
        }
    } else if !schedule.is_active_on(weekday_number(now.date())) {
        return false;
    }

    let (start, end) = effective_minutes(schedule, ov);
    let m = minute_of_day(now.time());
    m >= start && m <= end
}

/// Render the day's window as "HH:MM–HH:MM" (24h, zero-padded).
/// Custom times apply only for eating overrides; a skip override leaves
/// the text showing what the default would have been.
pub fn window_text(schedule: &Schedule, ov: Option<&DayOverride>) -> String {
    let (start, end) = effective_minutes(schedule, ov);
    format!(
        "{}–{}",
        format_minute_of_day(start),
        format_minute_of_day(end)
    )
}
