//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid weekday list: {0}")]
    InvalidWeekdays(String),

    #[error("Invalid override kind: {0}")]
    InvalidOverrideKind(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Invalid override: {0}")]
    InvalidOverride(String),

    #[error("No schedule selected: {0}")]
    NoScheduleSelected(String),

    #[error("Schedule not found: {0}")]
    ScheduleNotFound(i64),

    #[error("No override for date {0}")]
    OverrideNotFound(String),

    #[error("Meal not found: {0}")]
    MealNotFound(i64),

    #[error("Built-in schedule: {0}")]
    BuiltInSchedule(String),

    #[error("Schedule is selected: {0}")]
    ScheduleSelected(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
