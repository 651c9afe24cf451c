//! Lookup providers.
//!
//! A provider performs one external lookup for one [`QueryKind`] and always
//! resolves to a [`LookupResult`]: transport failures, timeouts, bad statuses
//! and malformed bodies are logged here and collapsed into
//! `LookupResult::Error`.
//!
//! The three concrete providers share [`FetchProvider`], which owns the
//! blocking-pool hop, the timeout and the failure policy. What differs per
//! identifier type lives in an [`Endpoint`]: how the request is built and how
//! the response is normalized.

pub mod email;
pub mod ip;
pub mod phone;

pub use email::BreachEndpoint;
pub use ip::IpEndpoint;
pub use phone::PhoneEndpoint;

use crate::client::{ApiRequest, ApiResponse, HttpFetcher};
use crate::domain::QueryKind;
use crate::error::{LookupApiResult, LookupError};
use crate::models::{LookupResult, UNKNOWN_FIELD};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Phone lookups against the dial-code geolocation service.
pub type PhoneProvider = FetchProvider<PhoneEndpoint>;

/// IPv4 lookups against the IP geolocation service.
pub type IpProvider = FetchProvider<IpEndpoint>;

/// Email lookups against the breach directory.
pub type EmailProvider = FetchProvider<BreachEndpoint>;

/// One external lookup for one identifier type.
#[async_trait]
pub trait LookupProvider: Send + Sync {
    /// The query kind this provider handles.
    fn kind(&self) -> QueryKind;

    /// Look up `query`. Never fails: problems come back as `LookupResult::Error`.
    async fn lookup(&self, query: &str) -> LookupResult;
}

/// Request building and response normalization for one upstream service.
pub trait Endpoint: Send + Sync + 'static {
    fn kind(&self) -> QueryKind;

    /// Build the GET request for `query`.
    fn request(&self, query: &str) -> LookupApiResult<ApiRequest>;

    /// Turn the raw response into a result variant matching [`Endpoint::kind`].
    fn normalize(&self, response: ApiResponse) -> LookupApiResult<LookupResult>;
}

/// Generic fetch-and-normalize provider.
///
/// The blocking HTTP exchange runs on tokio's blocking pool and is bounded by
/// the configured timeout.
pub struct FetchProvider<E> {
    endpoint: Arc<E>,
    fetcher: HttpFetcher,
}

impl<E: Endpoint> FetchProvider<E> {
    pub fn new(endpoint: E, timeout: Duration) -> Self {
        Self {
            endpoint: Arc::new(endpoint),
            fetcher: HttpFetcher::new(timeout),
        }
    }
}

fn fetch_and_normalize<E: Endpoint>(
    endpoint: &E,
    fetcher: &HttpFetcher,
    query: &str,
) -> LookupApiResult<LookupResult> {
    let request = endpoint.request(query)?;
    let response = fetcher.get(&request)?;
    endpoint.normalize(response)
}

#[async_trait]
impl<E: Endpoint> LookupProvider for FetchProvider<E> {
    fn kind(&self) -> QueryKind {
        self.endpoint.kind()
    }

    async fn lookup(&self, query: &str) -> LookupResult {
        let endpoint = self.endpoint.clone();
        let fetcher = self.fetcher.clone();
        let query = query.to_string();

        let task =
            tokio::task::spawn_blocking(move || fetch_and_normalize(&*endpoint, &fetcher, &query));

        let outcome = match tokio::time::timeout(self.fetcher.timeout(), task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_err)) => Err(LookupError::Other(format!("Task join error: {}", join_err))),
            Err(_) => Err(LookupError::Timeout),
        };

        match outcome {
            Ok(result) => {
                tracing::debug!(provider = %self.kind(), "Lookup succeeded");
                result
            }
            Err(LookupError::Timeout) => {
                tracing::warn!(
                    provider = %self.kind(),
                    timeout_ms = self.fetcher.timeout().as_millis() as u64,
                    "Lookup timed out"
                );
                LookupResult::Error
            }
            Err(e) => {
                tracing::error!(provider = %self.kind(), error = %e, "Lookup failed");
                LookupResult::Error
            }
        }
    }
}

/// Render a JSON field as display text, `N/A` when absent or null.
pub(crate) fn text_or_unknown(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => UNKNOWN_FIELD.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// JSON truthiness: `true`, non-zero numbers and non-empty strings, arrays or objects.
pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

/// Parse a body that must be a JSON object.
pub(crate) fn json_object(response: &ApiResponse) -> LookupApiResult<Value> {
    let value: Value = response.json()?;
    if !value.is_object() {
        return Err(LookupError::Other(
            "Expected a JSON object in the response body".to_string(),
        ));
    }
    Ok(value)
}
