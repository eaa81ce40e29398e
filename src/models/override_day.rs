use chrono::NaiveDate;
use serde::Serialize;

/// Kind of a per-day exception to the recurring schedule.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum OverrideKind {
    /// Force an eating window on this day, optionally with custom times.
    Eating,
    /// Suppress the eating window entirely on this day.
    Skip,
}

impl OverrideKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            OverrideKind::Eating => "eating",
            OverrideKind::Skip => "skip",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "eating" => Some(OverrideKind::Eating),
            "skip" => Some(OverrideKind::Skip),
            _ => None,
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, OverrideKind::Skip)
    }
}

/// A per-calendar-day exception, keyed by local date (at most one per day,
/// the store upserts on the date column).
#[derive(Debug, Clone, Serialize)]
pub struct DayOverride {
    pub id: i64,
    pub date: NaiveDate,              // ⇔ overrides.date (TEXT "YYYY-MM-DD", UNIQUE)
    pub kind: OverrideKind,           // ⇔ overrides.kind ('eating' | 'skip')
    pub start_minutes: Option<u32>,   // ⇔ overrides.start_minutes (only for eating)
    pub end_minutes: Option<u32>,     // ⇔ overrides.end_minutes (only for eating)
    pub schedule_id: Option<i64>,     // ⇔ overrides.schedule_id (advisory back-reference)
}

/// Look up the override for one calendar day in a fetched slice.
/// Linear scan: override volumes stay at a few hundred rows at most.
pub fn find_for_day(overrides: &[DayOverride], day: NaiveDate) -> Option<&DayOverride> {
    overrides.iter().find(|o| o.date == day)
}
