//! SQLite connection wrapper (one connection per CLI run or HTTP request).

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(Self { conn })
    }

    /// In-memory database, already migrated.
    pub fn in_memory() -> crate::errors::AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        crate::db::initialize::init_db(&conn)?;
        Ok(Self { conn })
    }
}
