use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum MealKind {
    Meal,
    Electrolyte,
}

impl MealKind {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            MealKind::Meal => "meal",
            MealKind::Electrolyte => "electrolyte",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "meal" => Some(MealKind::Meal),
            "electrolyte" => Some(MealKind::Electrolyte),
            _ => None,
        }
    }
}

/// A logged meal or electrolyte intake.
#[derive(Debug, Clone, Serialize)]
pub struct Meal {
    pub id: i64,
    pub date: NaiveDate,    // ⇔ meals.date (TEXT "YYYY-MM-DD")
    pub time: NaiveTime,    // ⇔ meals.time (TEXT "HH:MM")
    pub kind: MealKind,     // ⇔ meals.kind ('meal' | 'electrolyte')
    pub name: String,       // ⇔ meals.name
    pub in_window: bool,    // ⇔ meals.in_window (evaluated at logging time)
    pub created_at: String, // ⇔ meals.created_at (TEXT, ISO8601)
}

impl Meal {
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        kind: MealKind,
        name: &str,
        in_window: bool,
    ) -> Self {
        Self {
            id: 0,
            date,
            time,
            kind,
            name: name.to_string(),
            in_window,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}
