//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! The host UI model is single-writer; nothing here synchronizes
//! concurrent mutations.

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}
