//! Breach-directory lookup for email addresses.

use super::Endpoint;
use crate::client::{ApiRequest, ApiResponse};
use crate::config::Config;
use crate::domain::{EmailAddress, QueryKind};
use crate::error::{LookupApiResult, LookupError};
use crate::models::{BreachReport, LookupResult};
use serde::Deserialize;

/// Header carrying the breach-directory API key.
pub const API_KEY_HEADER: &str = "hibp-api-key";

/// One breach record. The directory sends more fields; only the name is shown.
#[derive(Debug, Deserialize)]
struct BreachRecord {
    #[serde(rename = "Name")]
    name: String,
}

/// Builds `GET {base}/breachedaccount/{email}` with the API key header.
///
/// A 200 answer lists breaches. "Not found" and other non-error statuses mean
/// the address is clean; 4xx (other than 404) and 5xx are failures.
#[derive(Clone)]
pub struct BreachEndpoint {
    base_url: String,
    api_key: String,
}

impl BreachEndpoint {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.breach_api_url.clone(), config.hibp_api_key.clone())
    }
}

impl std::fmt::Debug for BreachEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BreachEndpoint")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl Endpoint for BreachEndpoint {
    fn kind(&self) -> QueryKind {
        QueryKind::Email
    }

    fn request(&self, query: &str) -> LookupApiResult<ApiRequest> {
        let email = EmailAddress::new(query).map_err(|e| LookupError::Other(e.to_string()))?;
        let url = format!(
            "{}/breachedaccount/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(email.as_str())
        );
        Ok(ApiRequest::get(url).header(API_KEY_HEADER, self.api_key.as_str()))
    }

    fn normalize(&self, response: ApiResponse) -> LookupApiResult<LookupResult> {
        match response.status {
            200 => {
                let records: Vec<BreachRecord> = response.json()?;
                let names = records.into_iter().map(|r| r.name).collect();
                Ok(LookupResult::Email(BreachReport::from_names(names)))
            }
            404 => Ok(LookupResult::Email(BreachReport::none())),
            status if status < 400 => {
                tracing::debug!(status, "Breach directory answered without a breach list");
                Ok(LookupResult::Email(BreachReport::none()))
            }
            status => Err(LookupError::ApiError {
                status,
                message: response.body,
            }),
        }
    }
}
