//! Configuration System
//!
//! Layered configuration for the enclosing content-distribution service:
//! built-in defaults overlaid with `ADDON_SYNC_*` environment variables
//! (`__` separates nested keys, e.g. `ADDON_SYNC_LOGGING__LEVEL`).

use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use crate::types::MAX_TREE_DEPTH;
use crate::DEFAULT_SERVER_PORT;
use config::{Config, Environment};
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// TCP port of the content-distribution service
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum directory nesting accepted at tree ingestion
    #[serde(default = "default_max_tree_depth")]
    pub max_tree_depth: usize,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_port() -> u16 {
    DEFAULT_SERVER_PORT
}

fn default_max_tree_depth() -> usize {
    MAX_TREE_DEPTH
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            max_tree_depth: default_max_tree_depth(),
            logging: LoggingConfig::default(),
        }
    }
}

impl SyncConfig {
    /// Load configuration: defaults overlaid with environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("ADDON_SYNC")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(ConfigError::from)?;

        let loaded: SyncConfig = config.try_deserialize().map_err(ConfigError::from)?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject configurations no deployment can mean.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port cannot be 0".to_string()));
        }
        if self.max_tree_depth == 0 {
            return Err(ConfigError::Invalid(
                "max_tree_depth cannot be 0".to_string(),
            ));
        }
        Ok(())
    }
}
