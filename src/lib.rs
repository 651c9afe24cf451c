//! OSINT Lookup Bot - classify a free-text query and enrich it from public lookup services.
//!
//! A query is classified as a phone number, an IPv4 address or an email address,
//! sent to the matching lookup service and rendered as a short report.
//!
//! # Architecture
//!
//! - **domain**: Shape predicates, value objects and first-match classification
//! - **providers**: One lookup provider per identifier type over a shared fetch-and-normalize core
//! - **formatter**: Pure rendering of lookup results into reply text and action links
//! - **dispatcher**: Classify → look up → render for one message
//! - **client**: Blocking HTTP access used by the providers
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types
//! - **telegram** / **server**: Chat front-ends (Telegram long polling, MCP over stdio)

pub mod client;
pub mod config;
pub mod dispatcher;
pub mod domain;
pub mod error;
pub mod formatter;
pub mod models;
pub mod providers;
pub mod server;
pub mod telegram;

pub use config::{Config, Transport};
pub use dispatcher::QueryDispatcher;
pub use domain::QueryKind;
pub use error::{ConfigError, LookupError, TelegramError};
pub use models::{ActionLink, BreachReport, IpReport, LookupResult, PhoneReport, RenderedResponse};
pub use providers::{EmailProvider, FetchProvider, IpProvider, LookupProvider, PhoneProvider};
pub use server::LookupMcpServer;
pub use telegram::TelegramClient;
