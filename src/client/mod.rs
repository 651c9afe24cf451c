//! Blocking HTTP access for the lookup providers.
//!
//! Requests go through `ureq` and are meant to run on tokio's blocking pool via
//! `tokio::task::spawn_blocking`. Each call builds a fresh agent, so no
//! connection outlives the lookup that opened it.

use crate::error::{LookupApiResult, LookupError};
use serde::de::DeserializeOwned;
use std::io;
use std::time::Duration;

/// User-Agent sent with every lookup; the breach directory rejects anonymous clients.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A GET request described by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Fully built URL, query string included
    pub url: String,

    /// Extra request headers
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
        }
    }

    /// Add a request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Status and body of a completed exchange, whatever the status was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> LookupApiResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Turn a non-2xx response into `LookupError::ApiError`.
    pub fn error_for_status(self) -> LookupApiResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(LookupError::ApiError {
                status: self.status,
                message: self.body,
            })
        }
    }
}

/// Executes provider requests with a fixed overall timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Execute a GET request.
    ///
    /// HTTP error statuses are returned as a normal [`ApiResponse`]; only
    /// transport failures and unreadable bodies become errors.
    pub fn get(&self, request: &ApiRequest) -> LookupApiResult<ApiResponse> {
        let agent = ureq::AgentBuilder::new()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build();

        let mut call = agent.get(&request.url);
        for (name, value) in &request.headers {
            call = call.set(name, value);
        }

        tracing::debug!("GET {}", redact_url(&request.url));

        match call.call() {
            Ok(response) => {
                let status = response.status();
                let body = response.into_string().map_err(map_io_error)?;
                Ok(ApiResponse { status, body })
            }
            Err(ureq::Error::Status(status, response)) => {
                let body = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Ok(ApiResponse { status, body })
            }
            Err(ureq::Error::Transport(transport)) => Err(map_transport_error(transport)),
        }
    }
}

/// Map a ureq transport error to a LookupError.
fn map_transport_error(transport: ureq::Transport) -> LookupError {
    if transport.kind() == ureq::ErrorKind::ConnectionFailed {
        return LookupError::HttpError("Connection failed".to_string());
    }

    let timed_out = std::error::Error::source(&transport)
        .and_then(|source| source.downcast_ref::<io::Error>())
        .map(|err| is_timeout(err.kind()))
        .unwrap_or(false);

    if timed_out {
        LookupError::Timeout
    } else {
        LookupError::HttpError(transport.to_string())
    }
}

fn map_io_error(err: io::Error) -> LookupError {
    if is_timeout(err.kind()) {
        LookupError::Timeout
    } else {
        LookupError::HttpError(err.to_string())
    }
}

fn is_timeout(kind: io::ErrorKind) -> bool {
    matches!(kind, io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
}

/// Drop the query string before logging, it carries the user's identifier.
fn redact_url(url: &str) -> &str {
    url.split_once('?').map(|(base, _)| base).unwrap_or(url)
}
