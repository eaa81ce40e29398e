use crate::cli::commands::{resolve_now, resolve_schedule};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::navigator::SCAN_DAYS;
use crate::core::notify::{HORIZON_DAYS, NotifySettings, plan_notifications, reschedule_all};
use crate::db::log::audit_log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::db::sink::DbNotificationSink;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::table::{Column, Table};
use chrono::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Notify {
        reschedule,
        list,
        schedule,
        at,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let conn = &pool.conn;

        if *reschedule {
            let now = resolve_now(at.as_ref())?;
            let sched = resolve_schedule(conn, cfg, *schedule)?;

            let overrides = queries::load_overrides_in_range(
                conn,
                now.date() - Duration::days(SCAN_DAYS),
                now.date() + Duration::days(HORIZON_DAYS),
            )?;

            let settings = NotifySettings {
                before_start_minutes: cfg.notify_before_start_minutes,
                before_end_minutes: cfg.notify_before_end_minutes,
            };

            let pending = plan_notifications(&sched, &overrides, &settings, now);

            // Snapshot and replace: stale registrations never survive.
            let mut sink = DbNotificationSink::new(conn);
            reschedule_all(&mut sink, &pending)?;

            audit_log(conn, "notify-reschedule", &sched.name, &pending.len().to_string())?;
            messages::success(format!(
                "Registered {} notification(s) for the next {} days",
                pending.len(),
                HORIZON_DAYS
            ));
            return Ok(());
        }

        if *list {
            print_pending(&queries::load_notifications(conn)?);
        }
    }
    Ok(())
}

fn print_pending(pending: &[(String, String, String, String)]) {
    if pending.is_empty() {
        println!("No pending notifications. Run 'notify --reschedule'.");
        return;
    }

    let mut table = Table::new(vec![
        Column { header: "FIRE AT".to_string(), width: 17 },
        Column { header: "ID".to_string(), width: 24 },
        Column { header: "TITLE".to_string(), width: 28 },
    ]);

    for (id, title, _body, fire_at) in pending {
        table.add_row(vec![fire_at.clone(), id.clone(), title.clone()]);
    }

    print!("{}", table.render());
}
