use rusqlite::{Connection, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `schedules` table.
fn ensure_schedules_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schedules (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL,
            start_minutes INTEGER NOT NULL CHECK(start_minutes BETWEEN 0 AND 1439),
            end_minutes   INTEGER NOT NULL CHECK(end_minutes BETWEEN 0 AND 1439),
            weekday_mask  INTEGER NOT NULL DEFAULT 0,
            built_in      INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )?;
    Ok(())
}

/// Create the `overrides` table. The UNIQUE date column is what makes
/// upsert-by-day work: at most one override per calendar day.
fn ensure_overrides_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS overrides (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            date          TEXT NOT NULL UNIQUE,
            kind          TEXT NOT NULL CHECK(kind IN ('eating','skip')),
            start_minutes INTEGER CHECK(start_minutes BETWEEN 0 AND 1439),
            end_minutes   INTEGER CHECK(end_minutes BETWEEN 0 AND 1439),
            schedule_id   INTEGER
        );

        CREATE INDEX IF NOT EXISTS idx_overrides_date ON overrides(date);
        "#,
    )?;
    Ok(())
}

/// Create the `meals` table.
fn ensure_meals_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS meals (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            date       TEXT NOT NULL,
            time       TEXT NOT NULL,
            kind       TEXT NOT NULL DEFAULT 'meal' CHECK(kind IN ('meal','electrolyte')),
            name       TEXT NOT NULL,
            in_window  INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_meals_date_time ON meals(date, time);
        "#,
    )?;
    Ok(())
}

/// Create the `notifications` table holding the registered pending set.
fn ensure_notifications_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS notifications (
            id      TEXT PRIMARY KEY,
            title   TEXT NOT NULL,
            body    TEXT NOT NULL,
            fire_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Run all pending migrations. Every step is idempotent, so this is safe
/// to call on every startup.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    ensure_schedules_table(conn)?;
    ensure_overrides_table(conn)?;
    ensure_meals_table(conn)?;
    ensure_notifications_table(conn)?;
    Ok(())
}
