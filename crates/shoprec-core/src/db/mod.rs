//! SQLite-backed interaction store

mod interactions;
mod schema;
mod unavailable;

pub use interactions::{
    ActivityEntry, ActivitySummary, HistoryEntry, Interaction, InteractionStore, InteractionType,
};
pub use schema::{create_schema, CURRENT_SCHEMA_VERSION};
pub use unavailable::UnavailableStore;

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;

use crate::error::{Result, ShoprecError};
use crate::map_store_err;

/// SQLite database holding the interaction log.
///
/// The connection sits behind a mutex, so writes from concurrent callers are
/// applied one at a time.
#[derive(Debug)]
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open or create the database file at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| map_store_err!("create database directory", e))?;
            }
        }

        let conn = Connection::open(path).map_err(|e| {
            ShoprecError::store_operation(&format!("open database at {}", path.display()), e)
        })?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| map_store_err!("enable WAL mode", e))?;
        conn.busy_timeout(std::time::Duration::from_secs(5))
            .map_err(|e| map_store_err!("set busy timeout", e))?;

        create_schema(&conn).map_err(|e| map_store_err!("create database schema", e))?;

        tracing::debug!(path = %path.display(), "interaction store opened");
        Ok(Database {
            conn: Mutex::new(conn),
        })
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| map_store_err!("open in-memory database", e))?;
        create_schema(&conn).map_err(|e| map_store_err!("create database schema", e))?;
        Ok(Database {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| map_store_err!("lock database connection", e))
    }

    #[cfg(test)]
    pub(crate) fn get_schema_version(&self) -> Result<i32> {
        self.conn()?
            .query_row(
                "SELECT value FROM store_meta WHERE key = 'schema_version'",
                [],
                |r| {
                    let s: String = r.get(0)?;
                    Ok(s.parse().unwrap_or(0))
                },
            )
            .map_err(|e| map_store_err!("read schema version", e))
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        if let Ok(conn) = self.conn.get_mut() {
            let _ = conn.pragma_update(None, "wal_checkpoint", "TRUNCATE");
        }
    }
}
