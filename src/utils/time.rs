//! Time utilities: parsing HH:MM, minute-of-day conversions, formatting.

use crate::errors::{AppError, AppResult};
use crate::models::schedule::MAX_MINUTE;
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Minutes since local midnight for a wall-clock time.
pub fn minute_of_day(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// Wall-clock time for a minute-of-day value in 0..=1439.
pub fn time_from_minutes(m: u32) -> NaiveTime {
    debug_assert!(m <= MAX_MINUTE);
    NaiveTime::from_hms_opt(m / 60, m % 60, 0).unwrap()
}

/// Render a minute-of-day value as zero-padded 24h "HH:MM".
pub fn format_minute_of_day(m: u32) -> String {
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// Parse an optional "HH:MM" CLI argument into a minute-of-day value.
pub fn parse_optional_minutes(input: Option<&String>) -> AppResult<Option<u32>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(minute_of_day(t)))
    } else {
        Ok(None)
    }
}
