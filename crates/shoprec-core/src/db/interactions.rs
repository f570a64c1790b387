//! Interaction logging and per-user aggregates

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use rusqlite::params;
use serde::{Deserialize, Serialize};

use super::Database;
use crate::bail_invalid;
use crate::error::{Result, ShoprecError};
use crate::map_store_err;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Kind of user action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionType {
    View,
    AddToCart,
}

impl InteractionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionType::View => "view",
            InteractionType::AddToCart => "add_to_cart",
        }
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionType {
    type Err = ShoprecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "view" => Ok(InteractionType::View),
            "add_to_cart" | "add-to-cart" | "cart" => Ok(InteractionType::AddToCart),
            other => bail_invalid!("interaction type", other),
        }
    }
}

/// One logged action
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    pub id: i64,
    pub user_id: String,
    pub product_id: i64,
    pub product_name: String,
    pub interaction_type: InteractionType,
    pub timestamp: Option<String>,
}

/// A product the user has interacted with, and how often
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub product_id: i64,
    pub product_name: String,
    pub count: u64,
    pub last_interaction: Option<String>,
}

/// Count and recency of one kind of action on one product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEntry {
    pub product_name: String,
    pub interaction_type: InteractionType,
    pub count: u64,
    pub last_interaction: Option<String>,
}

/// Per-type interaction totals for a user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ActivitySummary {
    pub views: u64,
    pub add_to_cart: u64,
}

impl ActivitySummary {
    pub fn total(&self) -> u64 {
        self.views + self.add_to_cart
    }
}

/// Durable, append-only log of user interactions
pub trait InteractionStore {
    /// Append one record. Identical actions accumulate.
    fn log(
        &self,
        user_id: &str,
        product_id: i64,
        product_name: &str,
        interaction_type: InteractionType,
    ) -> Result<()>;

    /// Distinct products the user touched, most frequent first, then most recent
    fn history(&self, user_id: &str) -> Result<Vec<HistoryEntry>>;

    /// Number of records logged for the user
    fn total_count(&self, user_id: &str) -> Result<u64>;

    /// Counts grouped by product name and action type, newest first
    fn activity(&self, user_id: &str) -> Result<Vec<ActivityEntry>>;

    fn activity_summary(&self, user_id: &str) -> Result<ActivitySummary>;
}

fn parse_type(idx: usize, raw: String) -> rusqlite::Result<InteractionType> {
    raw.parse().map_err(|e: ShoprecError| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

impl Database {
    /// Every record for the user in insertion order
    #[cfg(test)]
    pub(crate) fn interactions(&self, user_id: &str) -> Result<Vec<Interaction>> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare(
                "SELECT id, user_id, product_id, product_name, interaction_type, timestamp
                 FROM user_interactions WHERE user_id = ?1 ORDER BY id",
            )
            .map_err(|e| map_store_err!("prepare interaction query", e))?;

        let rows = stmt
            .query_map(params![user_id], |row| {
                Ok(Interaction {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    product_id: row.get(2)?,
                    product_name: row.get(3)?,
                    interaction_type: parse_type(4, row.get(4)?)?,
                    timestamp: row.get(5)?,
                })
            })
            .map_err(|e| map_store_err!("read interactions", e))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_store_err!("read interactions", e))
    }
}

impl InteractionStore for Database {
    fn log(
        &self,
        user_id: &str,
        product_id: i64,
        product_name: &str,
        interaction_type: InteractionType,
    ) -> Result<()> {
        let timestamp = Utc::now().format(TIMESTAMP_FORMAT).to_string();
        let mut conn = self.conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| map_store_err!("begin transaction", e))?;
        tx.execute(
            "INSERT INTO user_interactions (user_id, product_id, product_name, interaction_type, timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                user_id,
                product_id,
                product_name,
                interaction_type.as_str(),
                timestamp
            ],
        )
        .map_err(|e| map_store_err!("log interaction", e))?;
        tx.commit()
            .map_err(|e| map_store_err!("commit interaction", e))?;

        tracing::debug!(
            user = user_id,
            product_id,
            interaction = %interaction_type,
            "interaction logged"
        );
        Ok(())
    }

    fn history(&self, user_id: &str) -> Result<Vec<HistoryEntry>> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare(
                "SELECT product_id, product_name, COUNT(*) AS n, MAX(timestamp) AS last
                 FROM user_interactions
                 WHERE user_id = ?1
                 GROUP BY product_id, product_name
                 ORDER BY n DESC, last DESC, MAX(id) DESC",
            )
            .map_err(|e| map_store_err!("prepare history query", e))?;

        let rows = stmt
            .query_map(params![user_id], |row| {
                Ok(HistoryEntry {
                    product_id: row.get(0)?,
                    product_name: row.get(1)?,
                    count: row.get::<_, i64>(2)? as u64,
                    last_interaction: row.get(3)?,
                })
            })
            .map_err(|e| map_store_err!("read user history", e))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_store_err!("read user history", e))
    }

    fn total_count(&self, user_id: &str) -> Result<u64> {
        let count: i64 = self
            .conn()?
            .query_row(
                "SELECT COUNT(*) FROM user_interactions WHERE user_id = ?1",
                params![user_id],
                |r| r.get(0),
            )
            .map_err(|e| map_store_err!("count interactions", e))?;
        Ok(count as u64)
    }

    fn activity(&self, user_id: &str) -> Result<Vec<ActivityEntry>> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare(
                "SELECT product_name, interaction_type, COUNT(*) AS n, MAX(timestamp) AS last
                 FROM user_interactions
                 WHERE user_id = ?1
                 GROUP BY product_name, interaction_type
                 ORDER BY last DESC, MAX(id) DESC",
            )
            .map_err(|e| map_store_err!("prepare activity query", e))?;

        let rows = stmt
            .query_map(params![user_id], |row| {
                Ok(ActivityEntry {
                    product_name: row.get(0)?,
                    interaction_type: parse_type(1, row.get(1)?)?,
                    count: row.get::<_, i64>(2)? as u64,
                    last_interaction: row.get(3)?,
                })
            })
            .map_err(|e| map_store_err!("read user activity", e))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_store_err!("read user activity", e))
    }

    fn activity_summary(&self, user_id: &str) -> Result<ActivitySummary> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare(
                "SELECT interaction_type, COUNT(*) FROM user_interactions
                 WHERE user_id = ?1 GROUP BY interaction_type",
            )
            .map_err(|e| map_store_err!("prepare summary query", e))?;

        let mut rows = stmt
            .query(params![user_id])
            .map_err(|e| map_store_err!("read activity summary", e))?;

        let mut summary = ActivitySummary::default();
        while let Some(row) = rows
            .next()
            .map_err(|e| map_store_err!("read activity summary", e))?
        {
            let kind: String = row.get(0)?;
            let count = row.get::<_, i64>(1)? as u64;
            match kind.parse::<InteractionType>()? {
                InteractionType::View => summary.views = count,
                InteractionType::AddToCart => summary.add_to_cart = count,
            }
        }
        Ok(summary)
    }
}
