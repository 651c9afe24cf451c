//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Optional leading `+`, then 10 to 15 digits, spaces or hyphens.
static PHONE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-]{10,15}$").expect("phone pattern is valid"));

/// Test whether `input` is phone shaped.
///
/// No checksum or country-code validation is performed.
pub fn is_phone(input: &str) -> bool {
    PHONE_SHAPE.is_match(input)
}

/// Strip everything but ASCII digits.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// A type-safe wrapper for phone-shaped queries.
///
/// # Example
///
/// ```
/// use osint_lookup_bot::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+7 912 345-67-89").unwrap();
/// assert_eq!(phone.digits_only(), "79123456789");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the shape.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the input is not phone shaped.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !is_phone(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        digits_only(&self.0)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
