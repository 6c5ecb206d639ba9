//! Error types and handling module.
//!
//! Defines all application-specific error types and conversions.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport errors (connection refused, DNS, TLS).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-2xx response from the portfolio API.
    #[error("Request failed: {status} - {body}")]
    Api { status: u16, body: String },

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The swap executor raised an error.
    #[error("Swap executor error: {0}")]
    Executor(String),

    /// Filesystem errors other than a missing file.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<AppError> for McpError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Parse(_) => McpError::invalid_params(err.to_string(), None),
            AppError::Config(_) => McpError::invalid_request(err.to_string(), None),
            _ => McpError::internal_error(err.to_string(), None),
        }
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
