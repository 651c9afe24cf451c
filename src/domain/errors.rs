//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided email address is not `local@domain.tld` shaped.
    InvalidEmail(String),

    /// The provided phone number is not phone shaped.
    InvalidPhone(String),

    /// The provided string is not a dotted-decimal IPv4 address.
    InvalidIp(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidIp(ip) => write!(f, "Invalid IPv4 address: {}", ip),
        }
    }
}

impl std::error::Error for ValidationError {}
