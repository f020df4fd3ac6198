//! Application configuration
//!
//! One JSON config file holding the data file path and the HTTP section.
//! Missing fields fall back to defaults, so an empty `{}` is a valid
//! config.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http_server::HttpServerConfig;

/// Configuration errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(String),

    #[error("Invalid config JSON: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the JSON document holding the book collection
    #[serde(default = "default_data_path")]
    pub data_path: String,

    /// HTTP server section
    #[serde(default)]
    pub http: HttpServerConfig,
}

fn default_data_path() -> String {
    "./data/books.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            http: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Read(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.data_path.is_empty() {
            return Err(ConfigError::Invalid("data_path must not be empty".into()));
        }
        if self.http.port == 0 {
            return Err(ConfigError::Invalid("http.port must be > 0".into()));
        }
        Ok(())
    }
}
