//! Error types for the OSINT lookup bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Lookup errors stay inside the providers: they are logged and collapsed into
//! [`crate::models::LookupResult::Error`] before anything reaches the user.

use thiserror::Error;

/// Errors that can occur while calling an external lookup service.
#[derive(Error, Debug)]
pub enum LookupError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Service answered with a status the provider treats as a failure
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Request exceeded the configured ceiling
    #[error("Request timeout")]
    Timeout,

    /// Generic lookup error with context
    #[error("Lookup error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised by the Telegram Bot API transport.
#[derive(Error, Debug)]
pub enum TelegramError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Bot API returned an error status code
    #[error("Bot API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Bot API answered `ok: false`
    #[error("Bot API rejected request: {0}")]
    Rejected(String),

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Convenience type alias for Results with LookupError
pub type LookupApiResult<T> = Result<T, LookupError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with TelegramError
pub type TelegramResult<T> = Result<T, TelegramError>;
