//! IPv4 address shape.

use super::errors::ValidationError;
use std::net::Ipv4Addr;

/// Parse a dotted-decimal IPv4 address (four octets, 0-255 each).
///
/// # Errors
///
/// Returns `ValidationError::InvalidIp` for anything else, including
/// shortened forms such as `127.1`.
pub fn parse_ipv4(input: &str) -> Result<Ipv4Addr, ValidationError> {
    input
        .parse::<Ipv4Addr>()
        .map_err(|_| ValidationError::InvalidIp(input.to_string()))
}

/// Test whether `input` is a syntactically valid IPv4 address.
pub fn is_ipv4(input: &str) -> bool {
    parse_ipv4(input).is_ok()
}
