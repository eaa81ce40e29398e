use crate::errors::{AppError, AppResult};
use crate::models::meal::{Meal, MealKind};
use crate::models::override_day::{DayOverride, OverrideKind};
use crate::models::schedule::Schedule;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

use crate::core::notify::PendingNotification;

// ---------------------------------------------------------------------------
// Schedules
// ---------------------------------------------------------------------------

pub fn map_schedule_row(row: &Row) -> Result<Schedule> {
    Ok(Schedule {
        id: row.get("id")?,
        name: row.get("name")?,
        start_minutes: row.get::<_, i64>("start_minutes")? as u32,
        end_minutes: row.get::<_, i64>("end_minutes")? as u32,
        weekday_mask: row.get::<_, i64>("weekday_mask")? as u8,
        built_in: row.get::<_, i64>("built_in")? == 1,
    })
}

pub fn load_schedules(conn: &Connection) -> AppResult<Vec<Schedule>> {
    let mut stmt = conn.prepare("SELECT * FROM schedules ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_schedule_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_schedule(conn: &Connection, id: i64) -> AppResult<Schedule> {
    let mut stmt = conn.prepare("SELECT * FROM schedules WHERE id = ?1")?;
    stmt.query_row([id], map_schedule_row)
        .optional()?
        .ok_or(AppError::ScheduleNotFound(id))
}

pub fn insert_schedule(conn: &Connection, s: &Schedule) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO schedules (name, start_minutes, end_minutes, weekday_mask, built_in)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            s.name,
            s.start_minutes,
            s.end_minutes,
            s.weekday_mask,
            if s.built_in { 1 } else { 0 },
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update a schedule (all fields except id). Built-in protection is the
/// caller's concern; the store itself stays dumb.
pub fn update_schedule(conn: &Connection, s: &Schedule) -> AppResult<()> {
    conn.execute(
        "UPDATE schedules
         SET name = ?1, start_minutes = ?2, end_minutes = ?3, weekday_mask = ?4
         WHERE id = ?5",
        params![s.name, s.start_minutes, s.end_minutes, s.weekday_mask, s.id],
    )?;
    Ok(())
}

pub fn delete_schedule(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM schedules WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::ScheduleNotFound(id));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Overrides (keyed by calendar day)
// ---------------------------------------------------------------------------

pub fn map_override_row(row: &Row) -> Result<DayOverride> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let kind_str: String = row.get("kind")?;
    let kind = OverrideKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidOverrideKind(kind_str.clone())),
        )
    })?;

    Ok(DayOverride {
        id: row.get("id")?,
        date,
        kind,
        start_minutes: row.get::<_, Option<i64>>("start_minutes")?.map(|m| m as u32),
        end_minutes: row.get::<_, Option<i64>>("end_minutes")?.map(|m| m as u32),
        schedule_id: row.get("schedule_id")?,
    })
}

pub fn load_override_by_date(conn: &Connection, date: NaiveDate) -> AppResult<Option<DayOverride>> {
    let mut stmt = conn.prepare("SELECT * FROM overrides WHERE date = ?1")?;
    let date_str = date.format("%Y-%m-%d").to_string();
    Ok(stmt.query_row([date_str], map_override_row).optional()?)
}

/// Load every override whose date falls in [from, to] (both inclusive).
pub fn load_overrides_in_range(
    conn: &Connection,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Vec<DayOverride>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM overrides
         WHERE date >= ?1 AND date <= ?2
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map(
        [
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string(),
        ],
        map_override_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_all_overrides(conn: &Connection) -> AppResult<Vec<DayOverride>> {
    let mut stmt = conn.prepare("SELECT * FROM overrides ORDER BY date ASC")?;
    let rows = stmt.query_map([], map_override_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Upsert the override for one calendar day. The UNIQUE date column
/// guarantees at most one row per day; a second upsert replaces the
/// kind/minutes of the existing row.
pub fn upsert_override(
    conn: &Connection,
    date: NaiveDate,
    kind: OverrideKind,
    start_minutes: Option<u32>,
    end_minutes: Option<u32>,
    schedule_id: Option<i64>,
) -> AppResult<()> {
    // Skip overrides never carry custom minutes.
    if kind.is_skip() && (start_minutes.is_some() || end_minutes.is_some()) {
        return Err(AppError::InvalidOverride(
            "skip overrides cannot have custom times".to_string(),
        ));
    }

    conn.execute(
        "INSERT INTO overrides (date, kind, start_minutes, end_minutes, schedule_id)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(date) DO UPDATE SET
             kind = excluded.kind,
             start_minutes = excluded.start_minutes,
             end_minutes = excluded.end_minutes,
             schedule_id = excluded.schedule_id",
        params![
            date.format("%Y-%m-%d").to_string(),
            kind.to_db_str(),
            start_minutes,
            end_minutes,
            schedule_id,
        ],
    )?;
    Ok(())
}

pub fn delete_override_by_date(conn: &Connection, date: NaiveDate) -> AppResult<()> {
    let date_str = date.format("%Y-%m-%d").to_string();
    let n = conn.execute("DELETE FROM overrides WHERE date = ?1", [date_str.clone()])?;
    if n == 0 {
        return Err(AppError::OverrideNotFound(date_str));
    }
    Ok(())
}

/// Garbage-collect overrides whose date precedes `today`. Run on app
/// start; returns the number of purged rows.
pub fn clear_past_overrides(conn: &Connection, today: NaiveDate) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM overrides WHERE date < ?1",
        [today.format("%Y-%m-%d").to_string()],
    )?;
    Ok(n)
}

// ---------------------------------------------------------------------------
// Meals
// ---------------------------------------------------------------------------

pub fn map_meal_row(row: &Row) -> Result<Meal> {
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let time = NaiveTime::parse_from_str(&time_str, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(time_str.clone())),
        )
    })?;

    let kind_str: String = row.get("kind")?;
    let kind = MealKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!("Invalid meal kind: {}", kind_str))),
        )
    })?;

    Ok(Meal {
        id: row.get("id")?,
        date,
        time,
        kind,
        name: row.get("name")?,
        in_window: row.get::<_, i64>("in_window")? == 1,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_meal(conn: &Connection, meal: &Meal) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO meals (date, time, kind, name, in_window, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            meal.date_str(),
            meal.time_str(),
            meal.kind.to_db_str(),
            meal.name,
            if meal.in_window { 1 } else { 0 },
            meal.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_meals_by_date(conn: &Connection, date: NaiveDate) -> AppResult<Vec<Meal>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM meals
         WHERE date = ?1
         ORDER BY time ASC",
    )?;

    let rows = stmt.query_map([date.format("%Y-%m-%d").to_string()], map_meal_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_meal(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM meals WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::MealNotFound(id));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Notifications (registered pending set)
// ---------------------------------------------------------------------------

pub fn clear_notifications(conn: &Connection) -> AppResult<()> {
    conn.execute("DELETE FROM notifications", [])?;
    Ok(())
}

pub fn insert_notification(conn: &Connection, n: &PendingNotification) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO notifications (id, title, body, fire_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            n.id,
            n.title,
            n.body,
            n.fire_at.format("%Y-%m-%d %H:%M").to_string(),
        ],
    )?;
    Ok(())
}

pub fn load_notifications(conn: &Connection) -> AppResult<Vec<(String, String, String, String)>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, body, fire_at FROM notifications ORDER BY fire_at ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
