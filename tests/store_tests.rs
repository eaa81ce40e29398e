//! Store behavior: seeding, upsert-by-day, past-override GC, meal CRUD,
//! and the persisted notification set. Runs against in-memory SQLite.

use chrono::NaiveDate;
use fastwin::core::notify::PendingNotification;
use fastwin::db::initialize::init_db;
use fastwin::db::pool::DbPool;
use fastwin::db::queries;
use fastwin::errors::AppError;
use fastwin::models::meal::{Meal, MealKind};
use fastwin::models::override_day::OverrideKind;

fn pool() -> DbPool {
    let pool = DbPool::new(":memory:").unwrap();
    init_db(&pool.conn).unwrap();
    pool
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn init_seeds_builtin_templates_once() {
    let pool = pool();
    let schedules = queries::load_schedules(&pool.conn).unwrap();
    assert_eq!(schedules.len(), 3);
    assert_eq!(schedules[0].name, "16:8");
    assert_eq!(schedules[0].start_minutes, 720);
    assert_eq!(schedules[0].end_minutes, 1200);
    assert!(schedules.iter().all(|s| s.built_in));

    // Re-running init must not duplicate the templates.
    init_db(&pool.conn).unwrap();
    assert_eq!(queries::load_schedules(&pool.conn).unwrap().len(), 3);
}

#[test]
fn upsert_override_is_one_row_per_day() {
    let pool = pool();
    let d = day("2025-03-10");

    queries::upsert_override(&pool.conn, d, OverrideKind::Eating, Some(600), Some(840), None)
        .unwrap();
    queries::upsert_override(&pool.conn, d, OverrideKind::Skip, None, None, None).unwrap();

    let all = queries::load_all_overrides(&pool.conn).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].kind, OverrideKind::Skip);
    assert_eq!(all[0].start_minutes, None);
}

#[test]
fn skip_override_rejects_custom_times() {
    let pool = pool();
    let err = queries::upsert_override(
        &pool.conn,
        day("2025-03-10"),
        OverrideKind::Skip,
        Some(600),
        None,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidOverride(_)));
}

#[test]
fn clear_past_purges_only_older_dates() {
    let pool = pool();
    for d in ["2025-03-07", "2025-03-09", "2025-03-10", "2025-03-12"] {
        queries::upsert_override(&pool.conn, day(d), OverrideKind::Skip, None, None, None)
            .unwrap();
    }

    let purged = queries::clear_past_overrides(&pool.conn, day("2025-03-10")).unwrap();
    assert_eq!(purged, 2);

    let left = queries::load_all_overrides(&pool.conn).unwrap();
    assert_eq!(left.len(), 2);
    assert_eq!(left[0].date, day("2025-03-10"));
}

#[test]
fn range_load_is_inclusive_on_both_ends() {
    let pool = pool();
    for d in ["2025-03-08", "2025-03-10", "2025-03-12", "2025-03-14"] {
        queries::upsert_override(&pool.conn, day(d), OverrideKind::Skip, None, None, None)
            .unwrap();
    }

    let hits =
        queries::load_overrides_in_range(&pool.conn, day("2025-03-10"), day("2025-03-12"))
            .unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].date, day("2025-03-10"));
    assert_eq!(hits[1].date, day("2025-03-12"));
}

#[test]
fn deleting_a_missing_override_reports_not_found() {
    let pool = pool();
    let err = queries::delete_override_by_date(&pool.conn, day("2025-03-10")).unwrap_err();
    assert!(matches!(err, AppError::OverrideNotFound(_)));
}

#[test]
fn meal_crud_round_trip() {
    let pool = pool();
    let d = day("2025-03-10");

    let t = chrono::NaiveTime::from_hms_opt(13, 15, 0).unwrap();
    let meal = Meal::new(d, t, MealKind::Meal, "lunch", true);
    let id = queries::insert_meal(&pool.conn, &meal).unwrap();

    let loaded = queries::load_meals_by_date(&pool.conn, d).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "lunch");
    assert_eq!(loaded[0].time_str(), "13:15");
    assert!(loaded[0].in_window);

    queries::delete_meal(&pool.conn, id).unwrap();
    assert!(queries::load_meals_by_date(&pool.conn, d).unwrap().is_empty());

    let err = queries::delete_meal(&pool.conn, id).unwrap_err();
    assert!(matches!(err, AppError::MealNotFound(_)));
}

#[test]
fn notification_set_is_replaced_not_appended() {
    let pool = pool();

    let n = PendingNotification {
        id: "window-open-2025-03-10".to_string(),
        title: "Eating window opens soon".to_string(),
        body: "Today's window: 12:00–20:00".to_string(),
        fire_at: day("2025-03-10").and_hms_opt(11, 30, 0).unwrap(),
    };
    queries::insert_notification(&pool.conn, &n).unwrap();
    queries::insert_notification(&pool.conn, &n).unwrap();
    assert_eq!(queries::load_notifications(&pool.conn).unwrap().len(), 1);

    queries::clear_notifications(&pool.conn).unwrap();
    assert!(queries::load_notifications(&pool.conn).unwrap().is_empty());
}
