use clap::{Parser, Subcommand};

/// Command-line interface definition for fastwin
/// CLI application to track intermittent-fasting eating windows with SQLite
#[derive(Parser)]
#[command(
    name = "fastwin",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple fasting tracker CLI: eating-window schedules, per-day overrides, meals, and notifications",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "set",
            num_args = 2,
            value_names = ["KEY", "VALUE"],
            help = "Set a configuration key (always_show_log_button, show_before_hours, show_after_hours, notify_before_start_minutes, notify_before_end_minutes)"
        )]
        set: Option<Vec<String>>,
    },

    /// Manage eating-window schedules
    Schedule {
        #[arg(long = "list", help = "List all schedules")]
        list: bool,

        #[arg(long = "add", value_name = "NAME", help = "Create a new schedule")]
        add: Option<String>,

        #[arg(long = "start", value_name = "HH:MM", help = "Window start time")]
        start: Option<String>,

        #[arg(long = "end", value_name = "HH:MM", help = "Window end time")]
        end: Option<String>,

        #[arg(
            long = "days",
            value_name = "DAYS",
            help = "Active weekdays: comma-separated day names (sun,mon,...) or 'daily'"
        )]
        days: Option<String>,

        #[arg(long = "edit", value_name = "ID", help = "Edit a schedule (built-ins must be copied first)")]
        edit: Option<i64>,

        #[arg(long = "rename", value_name = "NAME", help = "New name (used with --edit)")]
        rename: Option<String>,

        #[arg(long = "copy", value_name = "ID", help = "Duplicate a schedule into an editable copy")]
        copy: Option<i64>,

        #[arg(long = "as", value_name = "NAME", help = "Name for the copy (used with --copy)")]
        copy_name: Option<String>,

        #[arg(long = "del", value_name = "ID", help = "Delete a schedule (not the selected one)")]
        del: Option<i64>,

        #[arg(long = "select", value_name = "ID", help = "Select the active schedule")]
        select: Option<i64>,
    },

    /// Manage per-day overrides (eating/skip exceptions)
    Override {
        #[arg(long = "set", value_name = "DATE", help = "Upsert the override for a date (YYYY-MM-DD)")]
        set: Option<String>,

        #[arg(long = "kind", value_name = "KIND", help = "Override kind: eating or skip")]
        kind: Option<String>,

        #[arg(long = "start", value_name = "HH:MM", help = "Custom window start (eating only)")]
        start: Option<String>,

        #[arg(long = "end", value_name = "HH:MM", help = "Custom window end (eating only)")]
        end: Option<String>,

        #[arg(long = "del", value_name = "DATE", help = "Delete the override for a date")]
        del: Option<String>,

        #[arg(long = "list", help = "List all overrides")]
        list: bool,

        #[arg(long = "clear-past", help = "Purge overrides dated before today")]
        clear_past: bool,

        #[arg(long = "schedule", value_name = "ID", help = "Schedule to attribute the override to")]
        schedule: Option<i64>,
    },

    /// Show the current window state (the app's main screen)
    Status {
        #[arg(long = "json", help = "Emit the status as JSON")]
        json: bool,

        #[arg(
            long = "at",
            value_name = "DATETIME",
            help = "Evaluate at an explicit instant (\"YYYY-MM-DD HH:MM\") instead of now"
        )]
        at: Option<String>,

        #[arg(long = "schedule", value_name = "ID", help = "Evaluate against this schedule instead of the selected one")]
        schedule: Option<i64>,
    },

    /// Log and list meals / electrolyte intake
    Meal {
        #[arg(long = "add", value_name = "NAME", help = "Log a meal")]
        add: Option<String>,

        #[arg(long = "time", value_name = "HH:MM", help = "Time of the meal (default: now)")]
        time: Option<String>,

        #[arg(long = "date", value_name = "DATE", help = "Date of the meal (default: today)")]
        date: Option<String>,

        #[arg(long = "kind", value_name = "KIND", help = "Entry kind: meal or electrolyte")]
        kind: Option<String>,

        #[arg(long = "list", help = "List meals for a date (default: today)")]
        list: bool,

        #[arg(long = "del", value_name = "ID", help = "Delete a meal by id")]
        del: Option<i64>,

        #[arg(long = "schedule", value_name = "ID", help = "Schedule used to flag in/out of window")]
        schedule: Option<i64>,
    },

    /// Compute and register window notifications (14-day horizon)
    Notify {
        #[arg(long = "reschedule", help = "Cancel and re-register the pending notification set")]
        reschedule: bool,

        #[arg(long = "list", help = "List the registered pending set")]
        list: bool,

        #[arg(long = "schedule", value_name = "ID", help = "Schedule to plan against")]
        schedule: Option<i64>,

        #[arg(long = "at", value_name = "DATETIME", hide = true)]
        at: Option<String>,
    },
}
