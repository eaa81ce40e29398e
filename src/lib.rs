//! fastwin library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use db::pool::DbPool;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Schedule { .. } => cli::commands::schedule::handle(&cli.command, cfg, cli.test),
        Commands::Override { .. } => cli::commands::overrides::handle(&cli.command, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg),
        Commands::Meal { .. } => cli::commands::meal::handle(&cli.command, cfg),
        Commands::Notify { .. } => cli::commands::notify::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once; a --db flag overrides the configured database.
    let mut cfg = Config::load();
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // Startup garbage collection: past-dated overrides are dead weight.
    // Store failures here are logged, never propagated.
    if !matches!(cli.command, Commands::Init) && Path::new(&cfg.database).exists() {
        match DbPool::new(&cfg.database) {
            Ok(pool) => {
                if let Err(e) = db::queries::clear_past_overrides(&pool.conn, utils::date::today())
                {
                    ui::messages::warning(format!("Override cleanup skipped: {}", e));
                }
            }
            Err(e) => ui::messages::warning(format!("Override cleanup skipped: {}", e)),
        }
    }

    dispatch(&cli, &cfg)
}
