//! Normalized outcome of a provider call.

use serde::Serialize;

/// Placeholder shown for any field the upstream service did not supply.
pub const UNKNOWN_FIELD: &str = "N/A";

/// Maximum number of breach names kept for display.
pub const MAX_LISTED_BREACHES: usize = 5;

/// Dial-code lookup details for a phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneReport {
    /// Country name
    pub country: String,

    /// Mobile operator name
    pub operator: String,

    /// Whether the number belongs to a mobile range
    pub is_mobile: bool,
}

impl Default for PhoneReport {
    fn default() -> Self {
        Self {
            country: UNKNOWN_FIELD.to_string(),
            operator: UNKNOWN_FIELD.to_string(),
            is_mobile: false,
        }
    }
}

/// Geolocation details for an IPv4 address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpReport {
    pub country: String,
    pub city: String,
    /// Internet service provider
    pub isp: String,
}

impl Default for IpReport {
    fn default() -> Self {
        Self {
            country: UNKNOWN_FIELD.to_string(),
            city: UNKNOWN_FIELD.to_string(),
            isp: UNKNOWN_FIELD.to_string(),
        }
    }
}

/// Breach-directory result for an email address.
///
/// Holds at most [`MAX_LISTED_BREACHES`] names while `count` keeps the true
/// total, so a truncated list still reports how many breaches exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BreachReport {
    names: Vec<String>,
    count: usize,
}

impl BreachReport {
    /// Build a report from every breach name the directory returned.
    pub fn from_names(all_names: Vec<String>) -> Self {
        let count = all_names.len();
        let mut names = all_names;
        names.truncate(MAX_LISTED_BREACHES);
        Self { names, count }
    }

    /// A report for an address with no known breaches.
    pub fn none() -> Self {
        Self::default()
    }

    /// Breach names kept for display (at most five).
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// True number of breaches.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Normalized result of a lookup, one variant per provider.
///
/// `Error` carries no cause; the provider that failed logs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum LookupResult {
    Phone(PhoneReport),
    Ip(IpReport),
    Email(BreachReport),
    Error,
}

impl LookupResult {
    pub fn is_error(&self) -> bool {
        matches!(self, LookupResult::Error)
    }
}
