use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Weekday number of a calendar day using the 1=Sunday .. 7=Saturday
/// convention. The weekday-mask bit layout depends on this numbering.
pub fn weekday_number(d: NaiveDate) -> u32 {
    d.weekday().num_days_from_sunday() + 1
}
