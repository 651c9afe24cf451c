//! Domain value objects and input classification.
//!
//! This module contains the shape predicates for the three identifier types the
//! bot understands, type-safe wrappers built on them, and [`QueryKind`], the
//! first-match classification of a raw query.

pub mod classify;
pub mod email;
pub mod errors;
pub mod ip;
pub mod phone;

pub use classify::QueryKind;
pub use email::{is_email, EmailAddress};
pub use errors::ValidationError;
pub use ip::{is_ipv4, parse_ipv4};
pub use phone::{digits_only, is_phone, PhoneNumber};
