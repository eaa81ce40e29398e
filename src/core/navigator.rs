//! Window navigator: concrete window instants for a day, plus bounded
//! forward/backward scans for the next window start and previous window
//! end across override-aware days.
//!
//! The scans exist because weekday masks make occurrences non-uniform and
//! overrides can both suppress an active day and activate an inactive one,
//! so there is no closed-form "next occurrence" to compute.

use crate::core::evaluator::effective_minutes;
use crate::models::override_day::{self, DayOverride};
use crate::models::schedule::Schedule;
use crate::utils::date::weekday_number;
use crate::utils::time::time_from_minutes;
use chrono::{NaiveDate, NaiveDateTime};

/// Scan horizon for next/previous window searches. A weekly mask with one
/// active bit can put the next occurrence a full 7 days out; with "now"
/// already past that day's start, 7 would be an off-by-one miss, so the
/// cap is 8. An all-zero mask with no eating overrides legitimately
/// yields None — callers treat that as "no window", not an error.
pub const SCAN_DAYS: i64 = 8;

/// Resolve one calendar day to its concrete window instants, or None when
/// the day has no eating window (skip override, or inactive weekday with
/// no override). Eating overrides ignore the weekday mask.
pub fn day_window(
    schedule: &Schedule,
    day: NaiveDate,
    ov: Option<&DayOverride>,
) -> Option<(NaiveDateTime, NaiveDateTime)> {
    if let Some(o) = ov {
        if o.kind.is_skip() {
            return None;
        }
    } else if !schedule.is_active_on(weekday_number(day)) {
        return None;
    }

    let (start, end) = effective_minutes(schedule, ov);
    Some((
        day.and_time(time_from_minutes(start)),
        day.and_time(time_from_minutes(end)),
    ))
}

/// Today's window instants, but only while `now` lies inside them
/// (inclusive at both bounds, matching the evaluator).
pub fn current_window_range(
    schedule: &Schedule,
    now: NaiveDateTime,
    ov_today: Option<&DayOverride>,
) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let (start, end) = day_window(schedule, now.date(), ov_today)?;
    if start <= now && now <= end {
        Some((start, end))
    } else {
        None
    }
}

/// First window start strictly after `now`, scanning day-by-day from
/// now's own day. Skip-override days are never candidates.
pub fn next_window_start(
    schedule: &Schedule,
    now: NaiveDateTime,
    overrides: &[DayOverride],
) -> Option<NaiveDateTime> {
    let mut day = now.date();
    for _ in 0..SCAN_DAYS {
        let ov = override_day::find_for_day(overrides, day);
        if let Some((start, _)) = day_window(schedule, day, ov) {
            if start > now {
                return Some(start);
            }
        }
        day = day.succ_opt()?;
    }
    None
}

/// First window end strictly before `now`, scanning backward. Symmetric
/// to `next_window_start`.
pub fn previous_window_end(
    schedule: &Schedule,
    now: NaiveDateTime,
    overrides: &[DayOverride],
) -> Option<NaiveDateTime> {
    let mut day = now.date();
    for _ in 0..SCAN_DAYS {
        let ov = override_day::find_for_day(overrides, day);
        if let Some((_, end)) = day_window(schedule, day, ov) {
            if end < now {
                return Some(end);
            }
        }
        day = day.pred_opt()?;
    }
    None
}
