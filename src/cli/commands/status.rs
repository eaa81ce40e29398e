use crate::cli::commands::{resolve_now, resolve_schedule};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::evaluator::{is_in_window, window_text};
use crate::core::navigator::{
    SCAN_DAYS, current_window_range, next_window_start, previous_window_end,
};
use crate::core::visibility::{GracePolicy, should_show_primary};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::override_day;
use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct StatusReport {
    now: String,
    schedule: String,
    window: String,
    in_window: bool,
    current_start: Option<String>,
    current_end: Option<String>,
    next_window_start: Option<String>,
    previous_window_end: Option<String>,
    /// Minutes fasted so far, when outside the window.
    fasting_minutes: Option<i64>,
    show_log_button: bool,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { json, at, schedule } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let conn = &pool.conn;

        let now = resolve_now(at.as_ref())?;
        let sched = resolve_schedule(conn, cfg, *schedule)?;

        // One fetch covers every scan the core can perform from "now".
        let overrides = queries::load_overrides_in_range(
            conn,
            now.date() - Duration::days(SCAN_DAYS),
            now.date() + Duration::days(SCAN_DAYS),
        )?;

        let ov_today = override_day::find_for_day(&overrides, now.date());
        let in_window = is_in_window(&sched, now, ov_today);
        let current = current_window_range(&sched, now, ov_today);
        let next = next_window_start(&sched, now, &overrides);
        let prev = previous_window_end(&sched, now, &overrides);

        let policy = GracePolicy {
            always_show: cfg.always_show_log_button,
            show_before_hours: cfg.show_before_hours,
            show_after_hours: cfg.show_after_hours,
        };
        let show = should_show_primary(&policy, Some(&sched), &overrides, now);

        let fasting_minutes = if in_window {
            None
        } else {
            prev.map(|p| (now - p).num_minutes())
        };

        let report = StatusReport {
            now: fmt(now),
            schedule: sched.name.clone(),
            window: window_text(&sched, ov_today),
            in_window,
            current_start: current.map(|(s, _)| fmt(s)),
            current_end: current.map(|(_, e)| fmt(e)),
            next_window_start: next.map(fmt),
            previous_window_end: prev.map(fmt),
            fasting_minutes,
            show_log_button: show,
        };

        if *json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&report);
        }
    }
    Ok(())
}

fn fmt(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

fn print_report(r: &StatusReport) {
    println!("Schedule: {} ({})", r.schedule, r.window);
    if r.in_window {
        println!("EATING WINDOW OPEN");
        if let Some(end) = &r.current_end {
            println!("Closes at {}", end);
        }
    } else {
        println!("FASTING");
        if let Some(m) = r.fasting_minutes {
            println!("Fasted for {:02}:{:02}", m / 60, m % 60);
        }
        match &r.next_window_start {
            Some(next) => println!("Next window opens at {}", next),
            None => println!("No upcoming window"),
        }
    }
    println!(
        "Log-meal button: {}",
        if r.show_log_button { "visible" } else { "hidden" }
    );
}
