//! Notification planning: absolute fire instants for the rolling 14-day
//! horizon, derived from the same per-day window resolution as the
//! navigator.
//!
//! Planning is pure; registration goes through `NotificationSink` with
//! full cancel-and-reschedule semantics (snapshot and replace, never an
//! incremental diff), so re-running with identical inputs is idempotent.

use crate::core::evaluator::window_text;
use crate::core::navigator::day_window;
use crate::errors::AppResult;
use crate::models::override_day::{self, DayOverride};
use crate::models::schedule::Schedule;
use chrono::{Duration, NaiveDateTime};

/// Rolling horizon scheduled ahead of time.
pub const HORIZON_DAYS: i64 = 14;

/// User-configured lead times, in minutes before the window boundary.
#[derive(Debug, Clone, Copy)]
pub struct NotifySettings {
    pub before_start_minutes: i64,
    pub before_end_minutes: i64,
}

/// One notification to register with the delivery sink.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PendingNotification {
    pub id: String,
    pub title: String,
    pub body: String,
    pub fire_at: NaiveDateTime,
}

/// Delivery sink boundary. Fire-and-forget: the core never observes
/// delivery success.
pub trait NotificationSink {
    fn cancel_all(&mut self) -> AppResult<()>;
    fn schedule(&mut self, n: &PendingNotification) -> AppResult<()>;
}

/// Compute the pending set for the horizon starting at now's own day.
/// Skip-override days contribute nothing; instants already in the past
/// are silently dropped (on reschedule most of today's are).
pub fn plan_notifications(
    schedule: &Schedule,
    overrides: &[DayOverride],
    settings: &NotifySettings,
    now: NaiveDateTime,
) -> Vec<PendingNotification> {
    let mut out = Vec::new();
    let mut day = now.date();

    for _ in 0..HORIZON_DAYS {
        let ov = override_day::find_for_day(overrides, day);
        if let Some((start, end)) = day_window(schedule, day, ov) {
            let text = window_text(schedule, ov);

            let open_at = start - Duration::minutes(settings.before_start_minutes);
            if open_at > now {
                out.push(PendingNotification {
                    id: format!("window-open-{}", day),
                    title: "Eating window opens soon".to_string(),
                    body: format!("Today's window: {}", text),
                    fire_at: open_at,
                });
            }

            let close_at = end - Duration::minutes(settings.before_end_minutes);
            if close_at > now {
                out.push(PendingNotification {
                    id: format!("window-close-{}", day),
                    title: "Eating window closes soon".to_string(),
                    body: format!("Today's window: {}", text),
                    fire_at: close_at,
                });
            }
        }

        day = match day.succ_opt() {
            Some(d) => d,
            None => break,
        };
    }

    out
}

/// Replace the sink's whole pending set with `pending`.
pub fn reschedule_all(
    sink: &mut dyn NotificationSink,
    pending: &[PendingNotification],
) -> AppResult<()> {
    sink.cancel_all()?;
    for n in pending {
        sink.schedule(n)?;
    }
    Ok(())
}
