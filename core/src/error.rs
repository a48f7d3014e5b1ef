//! Error types for the Fortnite API client.
//!
//! # Design
//! Callers see exactly one failure kind, `RequestFailure`, regardless of
//! whether the network failed, the upstream answered with a non-2xx status
//! or the body could not be decoded. "Not found" and "unreachable" are told
//! apart only by the `status` they carry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status attached to a failure: an HTTP status code, or a transport-level
/// error code when no response was received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Status {
    Http(u16),
    Code(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Http(code) => write!(f, "{code}"),
            Status::Code(code) => f.write_str(code),
        }
    }
}

impl From<u16> for Status {
    fn from(code: u16) -> Self {
        Status::Http(code)
    }
}

impl From<&str> for Status {
    fn from(code: &str) -> Self {
        Status::Code(code.to_string())
    }
}

/// The uniform failure record returned by every endpoint.
///
/// Serializes as `{ "status"?: number | string, "error": string }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct RequestFailure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    pub error: String,
}

impl RequestFailure {
    pub fn new(status: Option<Status>, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
        }
    }

    /// The HTTP status code, if the failure carries one.
    pub fn http_status(&self) -> Option<u16> {
        match self.status {
            Some(Status::Http(code)) => Some(code),
            _ => None,
        }
    }
}

/// Success payload or failure record.
pub type ApiResult<T> = Result<T, RequestFailure>;

/// A failed exchange, as reported by a `Transport`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    pub code: Option<Status>,
    pub message: String,
}

impl TransportError {
    pub fn new(code: Option<Status>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<TransportError> for RequestFailure {
    fn from(err: TransportError) -> Self {
        RequestFailure {
            status: err.code,
            error: err.message,
        }
    }
}

/// Rejected client configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("base url must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),

    #[error("{name} is not valid: {reason}")]
    InvalidVar { name: &'static str, reason: String },

    #[cfg(feature = "reqwest")]
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// A string that does not name any variant of a parameter enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}
