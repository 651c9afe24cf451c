//! Dial-code geolocation lookup for phone numbers.

use super::{is_truthy, json_object, text_or_unknown, Endpoint};
use crate::client::{ApiRequest, ApiResponse};
use crate::config::Config;
use crate::domain::{PhoneNumber, QueryKind};
use crate::error::{LookupApiResult, LookupError};
use crate::models::{LookupResult, PhoneReport};

/// Builds `GET {base}?json&telcod={digits}` and reads `country.name`,
/// `"0".oper` and `"0".mobile` from the answer.
#[derive(Debug, Clone)]
pub struct PhoneEndpoint {
    base_url: String,
}

impl PhoneEndpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.phone_api_url.clone())
    }
}

impl Endpoint for PhoneEndpoint {
    fn kind(&self) -> QueryKind {
        QueryKind::Phone
    }

    fn request(&self, query: &str) -> LookupApiResult<ApiRequest> {
        let phone = PhoneNumber::new(query).map_err(|e| LookupError::Other(e.to_string()))?;
        let url = format!(
            "{}?json&telcod={}",
            self.base_url,
            urlencoding::encode(&phone.digits_only())
        );
        Ok(ApiRequest::get(url))
    }

    fn normalize(&self, response: ApiResponse) -> LookupApiResult<LookupResult> {
        let data = json_object(&response.error_for_status()?)?;

        // The service reports the matched number range under the key "0".
        let range = data.get("0");

        Ok(LookupResult::Phone(PhoneReport {
            country: text_or_unknown(data.get("country").and_then(|c| c.get("name"))),
            operator: text_or_unknown(range.and_then(|r| r.get("oper"))),
            is_mobile: is_truthy(range.and_then(|r| r.get("mobile"))),
        }))
    }
}
