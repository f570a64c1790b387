//! SQLite schema for the interaction log

use rusqlite::{Connection, Result};

pub const CURRENT_SCHEMA_VERSION: i32 = 1;

const SCHEMA_SQL: &str = r#"
-- Append-only log of user actions
CREATE TABLE IF NOT EXISTS user_interactions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id TEXT NOT NULL,
    product_id INTEGER NOT NULL,
    product_name TEXT NOT NULL,
    interaction_type TEXT NOT NULL CHECK (interaction_type IN ('view', 'add_to_cart')),
    timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
);
CREATE INDEX IF NOT EXISTS idx_interactions_user ON user_interactions(user_id);

-- Store metadata
CREATE TABLE IF NOT EXISTS store_meta (
    key TEXT PRIMARY KEY,
    value TEXT
);
"#;

/// Create tables if missing and record the schema version.
///
/// Existing interaction rows are never dropped.
pub fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    let current: Option<i32> = conn
        .query_row(
            "SELECT value FROM store_meta WHERE key = 'schema_version'",
            [],
            |r| r.get::<_, String>(0).map(|s| s.parse().unwrap_or(0)),
        )
        .ok();

    match current {
        Some(v) if v == CURRENT_SCHEMA_VERSION => {}
        Some(v) => {
            conn.execute(
                "UPDATE store_meta SET value = ?1 WHERE key = 'schema_version'",
                [&CURRENT_SCHEMA_VERSION.to_string()],
            )?;
            tracing::info!(
                "Interaction store schema updated from version {} to {}",
                v,
                CURRENT_SCHEMA_VERSION
            );
        }
        None => {
            conn.execute(
                "INSERT INTO store_meta (key, value) VALUES ('schema_version', ?1)",
                [&CURRENT_SCHEMA_VERSION.to_string()],
            )?;
        }
    }

    Ok(())
}
