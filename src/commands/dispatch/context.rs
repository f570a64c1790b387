//! Shared context for command execution

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use shoprec_core::catalog::Catalog;
use shoprec_core::config::EngineConfig;
use shoprec_core::db::Database;
use shoprec_core::error::Result;
use shoprec_core::Engine;

use super::macros::trace_command;

pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: EngineConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    /// Load the config file and apply command-line overrides
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let mut config = EngineConfig::load()?;
        if let Some(path) = &cli.catalog {
            config.catalog_path = path.clone();
        }
        if let Some(path) = &cli.db {
            config.database_path = path.clone();
        }
        if cli.seed.is_some() {
            config.seed = cli.seed;
        }

        tracing::debug!(
            source = %EngineConfig::source_display(),
            catalog = %config.catalog_path.display(),
            db = %config.database_path.display(),
            "config resolved"
        );
        Ok(Self { cli, config, start })
    }

    pub fn count(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.config.default_count)
    }

    pub fn catalog_path(&self) -> &PathBuf {
        &self.config.catalog_path
    }

    pub fn open_engine(&self) -> Result<Engine> {
        let engine = Engine::open(&self.config)?;
        trace_command!(self.start, "open_engine");
        Ok(engine)
    }

    pub fn open_catalog(&self) -> Result<Catalog> {
        let catalog = Catalog::load(self.catalog_path())?;
        trace_command!(self.start, "load_catalog");
        Ok(catalog)
    }

    pub fn open_store(&self) -> Result<Database> {
        let db = Database::open(&self.config.database_path)?;
        trace_command!(self.start, "open_store");
        Ok(db)
    }
}
