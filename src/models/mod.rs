//! Data models for lookup results and rendered replies.
//!
//! These values live for a single dispatch cycle: built when a message
//! arrives and dropped once the reply is delivered.

pub mod lookup;
pub mod response;

pub use lookup::{
    BreachReport, IpReport, LookupResult, PhoneReport, MAX_LISTED_BREACHES, UNKNOWN_FIELD,
};
pub use response::{ActionLink, RenderedResponse};
