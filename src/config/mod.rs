use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Currently selected schedule id (None until the user picks one).
    #[serde(default)]
    pub selected_schedule: Option<i64>,
    /// Show the log-meal affordance unconditionally.
    #[serde(default)]
    pub always_show_log_button: bool,
    #[serde(default = "default_show_before_hours")]
    pub show_before_hours: f64,
    #[serde(default = "default_show_after_hours")]
    pub show_after_hours: f64,
    #[serde(default = "default_notify_lead")]
    pub notify_before_start_minutes: i64,
    #[serde(default = "default_notify_lead")]
    pub notify_before_end_minutes: i64,
}

fn default_show_before_hours() -> f64 {
    2.5
}
fn default_show_after_hours() -> f64 {
    2.5
}
fn default_notify_lead() -> i64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            selected_schedule: None,
            always_show_log_button: false,
            show_before_hours: default_show_before_hours(),
            show_after_hours: default_show_after_hours(),
            notify_before_start_minutes: default_notify_lead(),
            notify_before_end_minutes: default_notify_lead(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("fastwin")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".fastwin")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("fastwin.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("fastwin.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Persist the configuration back to its YAML file.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                fs::create_dir_all(&dir)?;
                dir.join(p)
            }
        } else {
            fs::create_dir_all(&dir)?;
            dir.join("fastwin.sqlite")
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}
