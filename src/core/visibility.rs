//! Log-meal visibility policy: should the primary "log meal" affordance
//! be shown right now?
//!
//! Composes strictly on the evaluator/navigator so there is a single
//! source of truth for "is this day an eating day".

use crate::core::navigator::{current_window_range, next_window_start, previous_window_end};
use crate::models::override_day::{self, DayOverride};
use crate::models::schedule::Schedule;
use chrono::NaiveDateTime;

/// User-configured visibility knobs.
#[derive(Debug, Clone, Copy)]
pub struct GracePolicy {
    /// Show the affordance unconditionally (still requires a schedule).
    pub always_show: bool,
    /// Keep it visible this many hours before the next window opens.
    pub show_before_hours: f64,
    /// Keep it visible this many hours after the previous window closed.
    pub show_after_hours: f64,
}

pub fn should_show_primary(
    policy: &GracePolicy,
    schedule: Option<&Schedule>,
    overrides: &[DayOverride],
    now: NaiveDateTime,
) -> bool {
    // No schedule ⇒ nothing to evaluate against, regardless of always_show.
    let Some(schedule) = schedule else {
        return false;
    };

    if policy.always_show {
        return true;
    }

    let ov_today = override_day::find_for_day(overrides, now.date());
    if current_window_range(schedule, now, ov_today).is_some() {
        return true;
    }

    // About to open?
    if let Some(next) = next_window_start(schedule, now, overrides) {
        let until = (next - now).num_seconds() as f64;
        if until <= policy.show_before_hours * 3600.0 {
            return true;
        }
    }

    // Window just closed, grace period?
    if let Some(prev) = previous_window_end(schedule, now, overrides) {
        let since = (now - prev).num_seconds() as f64;
        if since <= policy.show_after_hours * 3600.0 {
            return true;
        }
    }

    false
}
