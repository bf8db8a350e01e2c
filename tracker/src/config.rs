//! Configuration management for the tracker.

use std::env;
use std::time::Duration;

/// Default card-database API endpoint.
const DEFAULT_BASE_URL: &str = "https://api.pokemontcg.io/v2";

/// Set code assumed until a set is picked from the catalog.
const DEFAULT_SET: &str = "sv9";

/// Tracker configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key sent as `X-Api-Key` on every request
    pub api_key: String,
    /// Base URL of the card-database API
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Set code selected at startup
    pub default_set: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key =
            env::var("POKEMONTCG_API_KEY").map_err(|_| ConfigError::MissingApiKey)?;

        let base_url = env::var("POKEMONTCG_API_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = env::var("POKEMONTCG_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::InvalidTimeout)?;

        let default_set =
            env::var("BINDER_DEFAULT_SET").unwrap_or_else(|_| DEFAULT_SET.to_string());

        Ok(Self {
            api_key,
            base_url,
            timeout,
            default_set,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("POKEMONTCG_API_KEY environment variable is required")]
    MissingApiKey,

    #[error("Invalid POKEMONTCG_TIMEOUT_SECS value")]
    InvalidTimeout,
}
