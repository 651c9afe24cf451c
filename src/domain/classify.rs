//! First-match classification of a raw query.

use super::{is_email, is_ipv4, is_phone};
use serde::Serialize;
use std::fmt;

/// The identifier category assigned to a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    Phone,
    IpAddress,
    Email,
    Unrecognized,
}

impl QueryKind {
    /// Classify `query` by testing the shapes in a fixed order: phone, then
    /// IPv4, then email. The first match wins even if a later shape would
    /// also accept the input.
    pub fn classify(query: &str) -> Self {
        if is_phone(query) {
            QueryKind::Phone
        } else if is_ipv4(query) {
            QueryKind::IpAddress
        } else if is_email(query) {
            QueryKind::Email
        } else {
            QueryKind::Unrecognized
        }
    }

    /// Stable lowercase name, used in logs and the MCP payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::Phone => "phone",
            QueryKind::IpAddress => "ip_address",
            QueryKind::Email => "email",
            QueryKind::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
