use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, set } = cmd {
        if let Some(kv) = set {
            apply_set(&kv[0], &kv[1])?;
            return Ok(());
        }

        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigSave)?;
            println!("{}", yaml);
        }
    }
    Ok(())
}

fn apply_set(key: &str, value: &str) -> AppResult<()> {
    // Reload from disk: the in-memory config may carry an ephemeral --db
    // override that must not be persisted.
    let mut updated = Config::load();

    match key {
        "always_show_log_button" => {
            updated.always_show_log_button = parse_bool(key, value)?;
        }
        "show_before_hours" => {
            updated.show_before_hours = parse_hours(key, value)?;
        }
        "show_after_hours" => {
            updated.show_after_hours = parse_hours(key, value)?;
        }
        "notify_before_start_minutes" => {
            updated.notify_before_start_minutes = parse_minutes(key, value)?;
        }
        "notify_before_end_minutes" => {
            updated.notify_before_end_minutes = parse_minutes(key, value)?;
        }
        other => {
            return Err(AppError::Config(format!("unknown key '{}'", other)));
        }
    }

    updated.save()?;
    messages::success(format!("{} = {}", key, value));
    Ok(())
}

fn parse_bool(key: &str, value: &str) -> AppResult<bool> {
    match value {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        _ => Err(AppError::Config(format!("{}: expected true/false, got '{}'", key, value))),
    }
}

fn parse_hours(key: &str, value: &str) -> AppResult<f64> {
    let h: f64 = value
        .parse()
        .map_err(|_| AppError::Config(format!("{}: expected hours, got '{}'", key, value)))?;
    if h < 0.0 {
        return Err(AppError::Config(format!("{}: must be >= 0", key)));
    }
    Ok(h)
}

fn parse_minutes(key: &str, value: &str) -> AppResult<i64> {
    let m: i64 = value
        .parse()
        .map_err(|_| AppError::Config(format!("{}: expected minutes, got '{}'", key, value)))?;
    if m < 0 {
        return Err(AppError::Config(format!("{}: must be >= 0", key)));
    }
    Ok(m)
}
