//! Configuration management module.
//!
//! Handles loading configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::error::AppError;

/// Base URL of the 1inch Portfolio API (v4).
pub const DEFAULT_PORTFOLIO_API_URL: &str = "https://api.1inch.dev/portfolio/portfolio/v4";

/// Default location of the order status file written by the swap executor.
pub const DEFAULT_ORDER_STATUS_FILE: &str = "order-status.json";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// 1inch developer portal API key, sent as a bearer token.
    pub api_key: String,
    /// Portfolio API base URL. Endpoint paths are appended verbatim.
    pub portfolio_api_url: String,
    /// Path of the JSON order status store.
    pub order_status_file: PathBuf,
    /// Command line used to run the cross-chain swap executor.
    pub swap_executor_command: Option<String>,
    /// Logging level (default: info).
    pub log_level: String,
}

impl Config {
    /// Create a configuration with defaults for everything except the API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            portfolio_api_url: DEFAULT_PORTFOLIO_API_URL.to_string(),
            order_status_file: PathBuf::from(DEFAULT_ORDER_STATUS_FILE),
            swap_executor_command: None,
            log_level: "info".to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `ONEINCH_API_KEY`: 1inch developer portal API key
    ///
    /// Optional environment variables:
    /// - `PORTFOLIO_API_URL`: Portfolio API base URL
    /// - `ORDER_STATUS_FILE`: Path to the order status store (default: order-status.json)
    /// - `SWAP_EXECUTOR_COMMAND`: Command that performs cross-chain swaps
    /// - `LOG_LEVEL`: Logging level (default: info)
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let api_key = env::var("ONEINCH_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::Config("ONEINCH_API_KEY environment variable not set".into()))?;

        let mut config = Self::new(api_key);

        if let Ok(url) = env::var("PORTFOLIO_API_URL") {
            config.portfolio_api_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(path) = env::var("ORDER_STATUS_FILE") {
            config.order_status_file = PathBuf::from(path);
        }
        config.swap_executor_command =
            env::var("SWAP_EXECUTOR_COMMAND").ok().filter(|cmd| !cmd.trim().is_empty());
        config.log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let config = Config::new("key");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.portfolio_api_url, DEFAULT_PORTFOLIO_API_URL);
        assert_eq!(config.order_status_file, PathBuf::from("order-status.json"));
        assert!(config.swap_executor_command.is_none());
        assert_eq!(config.log_level, "info");
    }
}
