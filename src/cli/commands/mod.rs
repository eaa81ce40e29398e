pub mod config;
pub mod init;
pub mod meal;
pub mod notify;
pub mod overrides;
pub mod schedule;
pub mod status;

use crate::config::Config;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::schedule::Schedule;
use chrono::NaiveDateTime;
use rusqlite::Connection;

/// Resolve the schedule a command operates on: an explicit --schedule flag
/// wins over the configured selection.
pub fn resolve_schedule(
    conn: &Connection,
    cfg: &Config,
    flag: Option<i64>,
) -> AppResult<Schedule> {
    let id = flag.or(cfg.selected_schedule).ok_or_else(|| {
        AppError::NoScheduleSelected(
            "pick one with 'schedule --select <ID>' or pass --schedule <ID>".to_string(),
        )
    })?;
    queries::load_schedule(conn, id)
}

/// Parse an explicit evaluation instant ("YYYY-MM-DD HH:MM"), falling back
/// to the local wall clock. The core itself never reads a clock.
pub fn resolve_now(at: Option<&String>) -> AppResult<NaiveDateTime> {
    match at {
        Some(s) => NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
            .map_err(|_| AppError::InvalidDate(s.to_string())),
        None => Ok(chrono::Local::now().naive_local()),
    }
}
