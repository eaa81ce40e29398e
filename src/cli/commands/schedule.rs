use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit_log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::schedule::{self, Schedule};
use crate::ui::messages;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_minute_of_day, parse_optional_minutes};

pub fn handle(cmd: &Commands, cfg: &Config, is_test: bool) -> AppResult<()> {
    if let Commands::Schedule {
        list,
        add,
        start,
        end,
        days,
        edit,
        rename,
        copy,
        copy_name,
        del,
        select,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let conn = &pool.conn;

        if let Some(name) = add {
            let start_min = parse_optional_minutes(start.as_ref())?
                .ok_or_else(|| AppError::InvalidTime("--start is required".to_string()))?;
            let end_min = parse_optional_minutes(end.as_ref())?
                .ok_or_else(|| AppError::InvalidTime("--end is required".to_string()))?;
            let mask = match days {
                Some(d) => schedule::parse_weekday_mask(d)
                    .ok_or_else(|| AppError::InvalidWeekdays(d.to_string()))?,
                None => schedule::ALL_DAYS_MASK,
            };

            let s = Schedule {
                id: 0,
                name: name.clone(),
                start_minutes: start_min,
                end_minutes: end_min,
                weekday_mask: mask,
                built_in: false,
            };
            let id = queries::insert_schedule(conn, &s)?;
            audit_log(conn, "schedule-add", &id.to_string(), name)?;
            messages::success(format!("Schedule '{}' created with id {}", name, id));
            return Ok(());
        }

        if let Some(id) = edit {
            let mut s = queries::load_schedule(conn, *id)?;
            if s.built_in {
                return Err(AppError::BuiltInSchedule(format!(
                    "'{}' is a built-in template; duplicate it with --copy {} --as <NAME>",
                    s.name, s.id
                )));
            }

            if let Some(m) = parse_optional_minutes(start.as_ref())? {
                s.start_minutes = m;
            }
            if let Some(m) = parse_optional_minutes(end.as_ref())? {
                s.end_minutes = m;
            }
            if let Some(d) = days {
                s.weekday_mask = schedule::parse_weekday_mask(d)
                    .ok_or_else(|| AppError::InvalidWeekdays(d.to_string()))?;
            }
            if let Some(n) = rename {
                s.name = n.clone();
            }

            queries::update_schedule(conn, &s)?;
            audit_log(conn, "schedule-edit", &id.to_string(), &s.name)?;
            messages::success(format!("Schedule {} updated", id));
            return Ok(());
        }

        if let Some(id) = copy {
            let src = queries::load_schedule(conn, *id)?;
            let name = match copy_name {
                Some(n) => n.clone(),
                None => format!("{} (copy)", src.name),
            };
            let dup = src.duplicate_as(&name);
            let new_id = queries::insert_schedule(conn, &dup)?;
            audit_log(conn, "schedule-copy", &new_id.to_string(), &name)?;
            messages::success(format!("Schedule '{}' created with id {}", name, new_id));
            return Ok(());
        }

        if let Some(id) = del {
            if cfg.selected_schedule == Some(*id) {
                let s = queries::load_schedule(conn, *id)?;
                return Err(AppError::ScheduleSelected(format!(
                    "'{}' is the selected schedule; select another one first",
                    s.name
                )));
            }
            queries::delete_schedule(conn, *id)?;
            audit_log(conn, "schedule-del", &id.to_string(), "")?;
            messages::success(format!("Schedule {} deleted", id));
            return Ok(());
        }

        if let Some(id) = select {
            let s = queries::load_schedule(conn, *id)?;
            if !is_test {
                let mut updated = Config::load();
                updated.selected_schedule = Some(*id);
                updated.save()?;
            }
            audit_log(conn, "schedule-select", &id.to_string(), &s.name)?;
            messages::success(format!("Selected schedule '{}' ({})", s.name, id));
            return Ok(());
        }

        if *list {
            print_schedules(&queries::load_schedules(conn)?, cfg);
        }
    }
    Ok(())
}

fn print_schedules(schedules: &[Schedule], cfg: &Config) {
    if schedules.is_empty() {
        println!("No schedules. Run 'init' to seed the built-in templates.");
        return;
    }

    let mut table = Table::new(vec![
        Column { header: "ID".to_string(), width: 4 },
        Column { header: "NAME".to_string(), width: 16 },
        Column { header: "WINDOW".to_string(), width: 13 },
        Column { header: "DAYS".to_string(), width: 28 },
        Column { header: "FLAGS".to_string(), width: 10 },
    ]);

    for s in schedules {
        let mut flags = Vec::new();
        if s.built_in {
            flags.push("built-in");
        }
        if cfg.selected_schedule == Some(s.id) {
            flags.push("selected");
        }

        table.add_row(vec![
            s.id.to_string(),
            s.name.clone(),
            format!(
                "{}–{}",
                format_minute_of_day(s.start_minutes),
                format_minute_of_day(s.end_minutes)
            ),
            schedule::describe_weekday_mask(s.weekday_mask),
            flags.join(","),
        ]);
    }

    print!("{}", table.render());
}
