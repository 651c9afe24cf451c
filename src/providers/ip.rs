//! Geolocation lookup for IPv4 addresses.

use super::{json_object, text_or_unknown, Endpoint};
use crate::client::{ApiRequest, ApiResponse};
use crate::config::Config;
use crate::domain::{parse_ipv4, QueryKind};
use crate::error::{LookupApiResult, LookupError};
use crate::models::{IpReport, LookupResult};

/// Builds `GET {base}/{address}` and reads `country`, `city` and `isp`.
#[derive(Debug, Clone)]
pub struct IpEndpoint {
    base_url: String,
}

impl IpEndpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.ip_api_url.clone())
    }
}

impl Endpoint for IpEndpoint {
    fn kind(&self) -> QueryKind {
        QueryKind::IpAddress
    }

    fn request(&self, query: &str) -> LookupApiResult<ApiRequest> {
        let address = parse_ipv4(query).map_err(|e| LookupError::Other(e.to_string()))?;
        Ok(ApiRequest::get(format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            address
        )))
    }

    fn normalize(&self, response: ApiResponse) -> LookupApiResult<LookupResult> {
        let data = json_object(&response.error_for_status()?)?;

        // Reserved and private ranges come back as status "fail"; fields stay N/A.
        if data.get("status").and_then(|s| s.as_str()) == Some("fail") {
            tracing::warn!(
                reason = data.get("message").and_then(|m| m.as_str()).unwrap_or(""),
                "IP geolocation returned no data"
            );
        }

        Ok(LookupResult::Ip(IpReport {
            country: text_or_unknown(data.get("country")),
            city: text_or_unknown(data.get("city")),
            isp: text_or_unknown(data.get("isp")),
        }))
    }
}
