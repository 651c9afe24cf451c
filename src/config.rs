//! Configuration management for the OSINT lookup bot.
//!
//! This module handles loading and validating configuration from environment variables.
//! The resulting [`Config`] is built once at startup and handed by reference to the
//! dispatcher and the chat transport.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Default dial-code geolocation endpoint.
pub const DEFAULT_PHONE_API_URL: &str = "https://htmlweb.ru/geo/api.php";

/// Default IP geolocation endpoint.
pub const DEFAULT_IP_API_URL: &str = "http://ip-api.com/json";

/// Default breach-directory endpoint.
pub const DEFAULT_BREACH_API_URL: &str = "https://haveibeenpwned.com/api/v3";

/// Default Telegram Bot API endpoint.
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Chat front-end the binary runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Telegram Bot API long polling
    Telegram,
    /// MCP server over stdio
    Mcp,
}

impl std::str::FromStr for Transport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "telegram" => Ok(Transport::Telegram),
            "mcp" => Ok(Transport::Mcp),
            other => Err(format!("Must be 'telegram' or 'mcp', got: {}", other)),
        }
    }
}

/// Configuration for the OSINT lookup bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Which chat front-end to run (default: telegram)
    pub transport: Transport,

    /// Telegram bot access token (required for the telegram transport)
    pub bot_token: Option<String>,

    /// Breach-directory API key
    pub hibp_api_key: String,

    /// Dial-code geolocation endpoint
    pub phone_api_url: String,

    /// IP geolocation endpoint
    pub ip_api_url: String,

    /// Breach-directory base URL
    pub breach_api_url: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Per-lookup timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Telegram long-poll duration in seconds (default: 30)
    pub poll_timeout: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `HIBP_API_KEY`: API key for the breach directory
    /// - `BOT_TOKEN`: Telegram bot token (only when `BOT_TRANSPORT=telegram`)
    ///
    /// Optional environment variables:
    /// - `BOT_TRANSPORT`: `telegram` or `mcp` (default: telegram)
    /// - `PHONE_API_URL`, `IP_API_URL`, `BREACH_API_URL`, `TELEGRAM_API_URL`
    /// - `REQUEST_TIMEOUT`: lookup timeout in seconds (default: 10)
    /// - `POLL_TIMEOUT`: long-poll duration in seconds (default: 30)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; real deployments set the variables directly.
        let _ = dotenvy::dotenv();

        let transport = match env::var("BOT_TRANSPORT") {
            Ok(val) => val
                .parse::<Transport>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "BOT_TRANSPORT".to_string(),
                    reason,
                })?,
            Err(_) => Transport::Telegram,
        };

        let hibp_api_key = env::var("HIBP_API_KEY")
            .map_err(|_| ConfigError::MissingVar("HIBP_API_KEY".to_string()))?;

        if hibp_api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "HIBP_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let bot_token = env::var("BOT_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        if transport == Transport::Telegram && bot_token.is_none() {
            return Err(ConfigError::MissingVar("BOT_TOKEN".to_string()));
        }

        let phone_api_url = Self::parse_env_url("PHONE_API_URL", DEFAULT_PHONE_API_URL)?;
        let ip_api_url = Self::parse_env_url("IP_API_URL", DEFAULT_IP_API_URL)?;
        let breach_api_url = Self::parse_env_url("BREACH_API_URL", DEFAULT_BREACH_API_URL)?;
        let telegram_api_url =
            Self::parse_env_url("TELEGRAM_API_URL", DEFAULT_TELEGRAM_API_URL)?;

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let poll_timeout = Self::parse_env_u64("POLL_TIMEOUT", 30)?;

        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be at least 1 second".to_string(),
            });
        }

        Ok(Config {
            transport,
            bot_token,
            hibp_api_key,
            phone_api_url,
            ip_api_url,
            breach_api_url,
            telegram_api_url,
            request_timeout,
            poll_timeout,
        })
    }

    /// Lookup timeout as a `Duration`.
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Read a URL variable, falling back to `default`, and check its scheme.
    fn parse_env_url(var_name: &str, default: &str) -> ConfigResult<String> {
        let url = env::var(var_name).unwrap_or_else(|_| default.to_string());

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        Ok(url.trim_end_matches('/').to_string())
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            transport: Transport::Telegram,
            bot_token: None,
            hibp_api_key: String::new(),
            phone_api_url: DEFAULT_PHONE_API_URL.to_string(),
            ip_api_url: DEFAULT_IP_API_URL.to_string(),
            breach_api_url: DEFAULT_BREACH_API_URL.to_string(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            request_timeout: 10,
            poll_timeout: 30,
        }
    }
}
