//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe one GET exchange as plain data. `Endpoints` builds
//! `HttpRequest` values and `request::parse_response` consumes `HttpResponse`
//! values without touching the network; a `Transport` (or the host itself)
//! executes the actual I/O in between.
//!
//! `HttpResponse` is the transport's own envelope around the upstream body,
//! which carries a second `data` envelope of its own. Unwrapping both levels
//! is the normalizer's job, not the transport's.

/// A GET request described as plain data.
///
/// `url` is absolute and already carries every query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        lookup(&self.headers, name)
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Build a response with no headers.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        lookup(&self.headers, name)
    }
}

fn lookup<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}
