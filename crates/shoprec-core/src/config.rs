//! Engine configuration (stored in ~/.config/shoprec/shoprec.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShoprecError};
use crate::similarity::VectorizerConfig;

const CONFIG_DIR: &str = "shoprec";
const CONFIG_FILE: &str = "shoprec.toml";
const CONFIG_DIR_ENV_VAR: &str = "SHOPREC_CONFIG_DIR";

/// What behavior recommendation does when the user's history cannot be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryFallback {
    /// Surface the store error to the caller
    #[default]
    Fail,
    /// Log a warning and treat the user as having no history
    NewUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub catalog_path: PathBuf,
    pub database_path: PathBuf,
    pub max_features: usize,
    pub stem: bool,
    /// Fixed seed for reproducible sampling; entropy when unset
    pub seed: Option<u64>,
    pub default_count: usize,
    pub history_fallback: HistoryFallback,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            catalog_path: PathBuf::from("products.csv"),
            database_path: PathBuf::from("user_behavior.db"),
            max_features: 5000,
            stem: false,
            seed: None,
            default_count: 5,
            history_fallback: HistoryFallback::Fail,
        }
    }
}

impl EngineConfig {
    fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    ShoprecError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from the user config directory, falling back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            ShoprecError::failed(&format!("read config from {}", path.display()), e)
        })?;

        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    #[cfg(test)]
    pub(crate) fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                ShoprecError::failed(&format!("create config directory {}", dir.display()), e)
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ShoprecError::failed("serialize config", e))?;

        fs::write(path, content)
            .map_err(|e| ShoprecError::failed(&format!("write config to {}", path.display()), e))
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_features == 0 {
            crate::bail_invalid!("max_features", self.max_features);
        }
        Ok(())
    }

    pub fn vectorizer(&self) -> VectorizerConfig {
        VectorizerConfig {
            max_features: self.max_features,
            stem: self.stem,
        }
    }

    /// Returns the source description for display purposes
    pub fn source_display() -> String {
        if std::env::var(CONFIG_DIR_ENV_VAR).is_ok() {
            "custom config directory".to_string()
        } else {
            "~/.config/shoprec/shoprec.toml".to_string()
        }
    }
}
