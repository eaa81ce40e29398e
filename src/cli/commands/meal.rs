use crate::cli::commands::resolve_schedule;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::evaluator::is_in_window;
use crate::db::log::audit_log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::meal::{Meal, MealKind};
use crate::ui::messages;
use crate::utils::date;
use crate::utils::table::{Column, Table};
use crate::utils::time::parse_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Meal {
        add,
        time,
        date: date_arg,
        kind,
        list,
        del,
        schedule,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let conn = &pool.conn;

        if let Some(name) = add {
            let d = match date_arg {
                Some(s) => date::parse_date(s)
                    .ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
                None => date::today(),
            };
            let t = match time {
                Some(s) => parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?,
                None => chrono::Local::now().time(),
            };
            let k = match kind.as_deref() {
                Some(s) => MealKind::from_db_str(s)
                    .ok_or_else(|| AppError::Other(format!("Invalid meal kind: {}", s)))?,
                None => MealKind::Meal,
            };

            // Flag the entry against the eating window at logging time.
            // No selected schedule is fine; the flag just stays false.
            let in_window = match resolve_schedule(conn, cfg, *schedule) {
                Ok(sched) => {
                    let ov = queries::load_override_by_date(conn, d)?;
                    is_in_window(&sched, d.and_time(t), ov.as_ref())
                }
                Err(AppError::NoScheduleSelected(_)) => false,
                Err(e) => return Err(e),
            };

            let meal = Meal::new(d, t, k, name, in_window);
            let id = queries::insert_meal(conn, &meal)?;
            audit_log(conn, "meal-add", &id.to_string(), name)?;

            if in_window {
                messages::success(format!("Logged '{}' at {} (in window)", name, meal.time_str()));
            } else {
                messages::warning(format!(
                    "Logged '{}' at {} (outside the eating window)",
                    name,
                    meal.time_str()
                ));
            }
            return Ok(());
        }

        if let Some(id) = del {
            queries::delete_meal(conn, *id)?;
            audit_log(conn, "meal-del", &id.to_string(), "")?;
            messages::success(format!("Meal {} deleted", id));
            return Ok(());
        }

        if *list {
            let d = match date_arg {
                Some(s) => date::parse_date(s)
                    .ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
                None => date::today(),
            };
            print_meals(d, &queries::load_meals_by_date(conn, d)?);
        }
    }
    Ok(())
}

fn print_meals(d: chrono::NaiveDate, meals: &[Meal]) {
    if meals.is_empty() {
        println!("No meals for {}", d);
        return;
    }

    let mut table = Table::new(vec![
        Column { header: "ID".to_string(), width: 4 },
        Column { header: "TIME".to_string(), width: 6 },
        Column { header: "KIND".to_string(), width: 12 },
        Column { header: "NAME".to_string(), width: 24 },
        Column { header: "IN WINDOW".to_string(), width: 9 },
    ]);

    for m in meals {
        table.add_row(vec![
            m.id.to_string(),
            m.time_str(),
            m.kind.to_db_str().to_string(),
            m.name.clone(),
            if m.in_window { "yes" } else { "no" }.to_string(),
        ]);
    }

    println!("=== {} ===", d);
    print!("{}", table.render());
}
