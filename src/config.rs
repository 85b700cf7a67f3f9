//! Server configuration
//!
//! Configuration comes from an optional TOML file with environment overrides.
//! The API key itself is never stored: the file names the environment
//! variable that holds it and the key is resolved at startup.

use crate::kagi::client::DEFAULT_BASE_URL;
use crate::kagi::KagiClientConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Environment variable selecting the summarization engine
pub const SUMMARIZER_ENGINE_ENV: &str = "KAGI_SUMMARIZER_ENGINE";

/// Default environment variable holding the Kagi API key
pub const DEFAULT_API_KEY_ENV: &str = "KAGI_API_KEY";

/// Main server configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default)]
    pub kagi: KagiSection,
    #[serde(default)]
    pub summarizer: SummarizerSection,
}

/// Kagi API connection settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KagiSection {
    /// Environment variable containing the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// HTTP request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for KagiSection {
    fn default() -> Self {
        Self {
            api_key_env: default_api_key_env(),
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Summarizer settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummarizerSection {
    /// Engine name; validated when the summarizer is called
    #[serde(default = "default_engine")]
    pub engine: String,
}

impl Default for SummarizerSection {
    fn default() -> Self {
        Self {
            engine: default_engine(),
        }
    }
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_engine() -> String {
    "cecil".to_string()
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ServerConfig {
    /// Build configuration from defaults and environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = ServerConfig::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML file, then apply environment overrides
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: ServerConfig = toml::from_str(&content)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(engine) = std::env::var(SUMMARIZER_ENGINE_ENV) {
            self.summarizer.engine = engine;
        }
    }

    /// Structural checks only; the engine name is checked per call
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.kagi.api_key_env.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "kagi.api_key_env must not be empty".to_string(),
            ));
        }

        url::Url::parse(&self.kagi.base_url).map_err(|e| {
            ConfigError::InvalidConfig(format!("kagi.base_url '{}': {e}", self.kagi.base_url))
        })?;

        if self.kagi.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidConfig(
                "kagi.request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the Kagi API key from its environment variable
    pub fn get_api_key(&self) -> Result<String, ConfigError> {
        std::env::var(&self.kagi.api_key_env)
            .map_err(|_| ConfigError::EnvVarNotFound(self.kagi.api_key_env.clone()))
    }

    /// Client settings with the API key resolved
    pub fn client_config(&self) -> Result<KagiClientConfig, ConfigError> {
        Ok(KagiClientConfig {
            api_key: self.get_api_key()?,
            base_url: self.kagi.base_url.clone(),
            timeout: Duration::from_secs(self.kagi.request_timeout_secs),
        })
    }
}
