use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::audit_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages;

/// Initialize configuration, database schema, and built-in templates.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    let pool = DbPool::new(&db_path.to_string_lossy())?;
    init_db(&pool.conn)?;
    audit_log(&pool.conn, "init", "", "database initialized")?;

    messages::success("Initialization complete. Built-in templates: 16:8, 18:6, 20:4");
    Ok(())
}
