//! Typed async client for the Fortnite API (`fortnite-api.com`).
//!
//! # Overview
//! Every endpoint is a one-shot GET that resolves to either the decoded
//! payload or a `RequestFailure { status, error }`. Failures are values:
//! network errors, non-2xx statuses and malformed bodies all come back as
//! `Err(RequestFailure)` and nothing panics.
//!
//! # Design
//! - `Endpoints` builds `HttpRequest` values without touching the network, so
//!   a host can execute them itself and feed the result to
//!   `request::parse_response`.
//! - `FortniteClient` runs the same requests through a `Transport`
//!   (`ReqwestTransport` by default) and keeps no state between calls.
//! - Language and key format are explicit arguments with documented
//!   defaults (`Language::DEFAULT`, `KeyFormat::DEFAULT`).

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod language;
pub mod request;
pub mod transport;
pub mod types;

pub use client::FortniteClient;
pub use config::ClientConfig;
pub use endpoints::{Endpoints, StatsQuery, DEFAULT_BASE_URL};
pub use error::{ApiResult, ConfigError, RequestFailure, Status, TransportError, UnknownVariant};
pub use http::{HttpRequest, HttpResponse};
pub use language::{AccountType, KeyFormat, Language, StatsImage, TimeWindow};
pub use request::{handle_request, parse_response};
pub use transport::Transport;

#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
