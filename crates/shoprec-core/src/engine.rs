//! Recommendation engine facade
//!
//! Owns the catalog, the similarity index and the interaction store, and
//! exposes the operations the presentation layer calls.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::{Catalog, Product};
use crate::config::{EngineConfig, HistoryFallback};
use crate::db::{
    ActivityEntry, ActivitySummary, Database, HistoryEntry, InteractionStore, InteractionType,
    UnavailableStore,
};
use crate::error::{Result, ShoprecError};
use crate::recommend::{self, HybridItem, ScoredProduct};
use crate::similarity::SimilarityIndex;
use crate::trace_time;

pub type SharedStore = Box<dyn InteractionStore + Send + Sync>;

pub struct Engine {
    catalog: Arc<Catalog>,
    index: Arc<SimilarityIndex>,
    store: SharedStore,
    rng: Mutex<StdRng>,
    history_fallback: HistoryFallback,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("products", &self.catalog.len())
            .field("history_fallback", &self.history_fallback)
            .finish()
    }
}

impl Engine {
    /// Load the catalog, build the similarity index and open the store.
    ///
    /// A missing or empty catalog halts initialization. A store that cannot
    /// be opened does not: its operations fail with `StoreUnavailable` while
    /// content recommendations keep working.
    pub fn open(config: &EngineConfig) -> Result<Self> {
        let start = Instant::now();
        let catalog = Catalog::load(&config.catalog_path)?;
        let store: SharedStore = match Database::open(&config.database_path) {
            Ok(db) => Box::new(db),
            Err(e) if e.is_store_unavailable() => {
                tracing::warn!(
                    path = %config.database_path.display(),
                    error = %e,
                    "interaction store unavailable"
                );
                Box::new(UnavailableStore::new(&e))
            }
            Err(e) => return Err(e),
        };
        let engine = Self::with_store(catalog, store, config)?;
        trace_time!(start, "engine_open", products = engine.catalog.len());
        Ok(engine)
    }

    /// Build an engine over an in-memory catalog and any interaction store
    pub fn with_store(catalog: Catalog, store: SharedStore, config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        let index = SimilarityIndex::build(&catalog, &config.vectorizer())?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Engine {
            catalog: Arc::new(catalog),
            index: Arc::new(index),
            store,
            rng: Mutex::new(rng),
            history_fallback: config.history_fallback,
        })
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn get_content_recommendations(&self, product_name: &str, n: usize) -> Vec<ScoredProduct> {
        recommend::recommend_content(&self.catalog, &self.index, product_name, n)
    }

    pub fn get_behavior_recommendations(&self, user_id: &str, n: usize) -> Result<Vec<Product>> {
        let history = self.history_for_sampling(user_id)?;
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| ShoprecError::failed("lock random source", e))?;
        Ok(recommend::recommend_behavior(
            &self.catalog,
            &history,
            n,
            &mut *rng,
        ))
    }

    /// Content picks for half of `n` (floor), behavior picks for the rest
    pub fn get_hybrid_recommendations(
        &self,
        user_id: &str,
        product_name: &str,
        n: usize,
    ) -> Result<Vec<HybridItem>> {
        let content =
            self.get_content_recommendations(product_name, recommend::content_share(n));
        let behavior = self.get_behavior_recommendations(user_id, n - content.len())?;
        Ok(recommend::combine(content, behavior))
    }

    pub fn log_interaction(
        &self,
        user_id: &str,
        product_id: i64,
        product_name: &str,
        interaction_type: InteractionType,
    ) -> Result<()> {
        self.store
            .log(user_id, product_id, product_name, interaction_type)
    }

    pub fn get_user_interaction_count(&self, user_id: &str) -> Result<u64> {
        self.store.total_count(user_id)
    }

    pub fn get_user_history(&self, user_id: &str) -> Result<Vec<HistoryEntry>> {
        self.store.history(user_id)
    }

    pub fn get_user_activity(&self, user_id: &str) -> Result<Vec<ActivityEntry>> {
        self.store.activity(user_id)
    }

    pub fn get_activity_summary(&self, user_id: &str) -> Result<ActivitySummary> {
        self.store.activity_summary(user_id)
    }

    fn history_for_sampling(&self, user_id: &str) -> Result<Vec<HistoryEntry>> {
        match self.store.history(user_id) {
            Ok(history) => Ok(history),
            Err(e) if e.is_store_unavailable() && self.history_fallback == HistoryFallback::NewUser => {
                tracing::warn!(
                    user = user_id,
                    error = %e,
                    "history unavailable, recommending as for a new user"
                );
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}
