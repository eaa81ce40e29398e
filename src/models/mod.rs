pub mod meal;
pub mod override_day;
pub mod schedule;
