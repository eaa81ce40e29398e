use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use crate::models::schedule::ALL_DAYS_MASK;
use rusqlite::{Connection, params};

/// Built-in schedule templates seeded at first launch.
/// Minutes since local midnight; all seven weekdays active.
const TEMPLATES: [(&str, u32, u32); 3] = [
    ("16:8", 720, 1200),
    ("18:6", 780, 1140),
    ("20:4", 840, 1080),
];

/// Initialize the database.
/// Schema creation is delegated to the migration engine; templates are
/// seeded only while the schedules table is still empty (no ambient
/// "seeded once" flag).
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    seed_templates(conn)?;
    Ok(())
}

fn seed_templates(conn: &Connection) -> AppResult<()> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM schedules", [], |row| row.get(0))?;
    if count > 0 {
        return Ok(());
    }

    for (name, start, end) in TEMPLATES {
        conn.execute(
            "INSERT INTO schedules (name, start_minutes, end_minutes, weekday_mask, built_in)
             VALUES (?1, ?2, ?3, ?4, 1)",
            params![name, start, end, ALL_DAYS_MASK],
        )?;
    }

    Ok(())
}
