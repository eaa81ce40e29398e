use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit_log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::override_day::{DayOverride, OverrideKind};
use crate::ui::messages;
use crate::utils::date;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_minute_of_day, parse_optional_minutes};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Override {
        set,
        kind,
        start,
        end,
        del,
        list,
        clear_past,
        schedule,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let conn = &pool.conn;

        if let Some(date_str) = set {
            let d = date::parse_date(date_str)
                .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;

            let k = match kind.as_deref() {
                Some(s) => OverrideKind::from_db_str(s)
                    .ok_or_else(|| AppError::InvalidOverrideKind(s.to_string()))?,
                None => OverrideKind::Eating,
            };

            let start_min = parse_optional_minutes(start.as_ref())?;
            let end_min = parse_optional_minutes(end.as_ref())?;
            let schedule_id = schedule.or(cfg.selected_schedule);

            queries::upsert_override(conn, d, k, start_min, end_min, schedule_id)?;
            audit_log(conn, "override-set", date_str, k.to_db_str())?;
            messages::success(format!("Override for {} set to {}", d, k.to_db_str()));
            return Ok(());
        }

        if let Some(date_str) = del {
            let d = date::parse_date(date_str)
                .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;
            queries::delete_override_by_date(conn, d)?;
            audit_log(conn, "override-del", date_str, "")?;
            messages::success(format!("Override for {} deleted", d));
            return Ok(());
        }

        if *clear_past {
            let n = queries::clear_past_overrides(conn, date::today())?;
            audit_log(conn, "override-clear-past", "", &n.to_string())?;
            messages::success(format!("Purged {} past override(s)", n));
            return Ok(());
        }

        if *list {
            print_overrides(&queries::load_all_overrides(conn)?);
        }
    }
    Ok(())
}

fn print_overrides(overrides: &[DayOverride]) {
    if overrides.is_empty() {
        println!("No overrides.");
        return;
    }

    let mut table = Table::new(vec![
        Column { header: "DATE".to_string(), width: 11 },
        Column { header: "KIND".to_string(), width: 7 },
        Column { header: "WINDOW".to_string(), width: 13 },
    ]);

    for o in overrides {
        let window = match (o.start_minutes, o.end_minutes) {
            _ if o.kind.is_skip() => "-".to_string(),
            (None, None) => "default".to_string(),
            (s, e) => format!(
                "{}–{}",
                s.map(format_minute_of_day).unwrap_or_else(|| "default".to_string()),
                e.map(format_minute_of_day).unwrap_or_else(|| "default".to_string()),
            ),
        };

        table.add_row(vec![
            o.date.format("%Y-%m-%d").to_string(),
            o.kind.to_db_str().to_string(),
            window,
        ]);
    }

    print!("{}", table.render());
}
