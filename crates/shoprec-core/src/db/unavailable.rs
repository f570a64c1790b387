//! Stand-in for an interaction store that could not be opened

use super::{ActivityEntry, ActivitySummary, HistoryEntry, InteractionStore, InteractionType};
use crate::error::{Result, ShoprecError};

/// Fails every operation with the error captured when opening the store
#[derive(Debug, Clone)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(open_error: &ShoprecError) -> Self {
        UnavailableStore {
            reason: open_error.to_string(),
        }
    }

    fn fail<T>(&self, operation: &str) -> Result<T> {
        Err(ShoprecError::store_operation(operation, &self.reason))
    }
}

impl InteractionStore for UnavailableStore {
    fn log(&self, _: &str, _: i64, _: &str, _: InteractionType) -> Result<()> {
        self.fail("log interaction")
    }

    fn history(&self, _: &str) -> Result<Vec<HistoryEntry>> {
        self.fail("read user history")
    }

    fn total_count(&self, _: &str) -> Result<u64> {
        self.fail("count interactions")
    }

    fn activity(&self, _: &str) -> Result<Vec<ActivityEntry>> {
        self.fail("read user activity")
    }

    fn activity_summary(&self, _: &str) -> Result<ActivitySummary> {
        self.fail("read activity summary")
    }
}
