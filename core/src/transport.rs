//! The HTTP collaborator that executes built requests.
//!
//! # Design
//! `Transport` is the one seam between the client and the network. An
//! implementation performs exactly one GET per call and reports non-2xx
//! statuses as ordinary `HttpResponse` data; only a failed exchange (DNS,
//! connect, timeout, unreadable body) is a `TransportError`. Timeouts, pooling
//! and TLS are entirely the implementation's business.

use std::future::Future;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes a single GET request.
pub trait Transport: Send + Sync {
    fn get(&self, request: &HttpRequest) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

impl<T: Transport> Transport for &T {
    fn get(&self, request: &HttpRequest) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
        (**self).get(request)
    }
}

#[cfg(feature = "reqwest")]
pub use self::reqwest_transport::ReqwestTransport;

#[cfg(feature = "reqwest")]
mod reqwest_transport {
    use std::time::Duration;

    use super::Transport;
    use crate::error::{Status, TransportError};
    use crate::http::{HttpRequest, HttpResponse};

    /// Async transport backed by a shared `reqwest::Client`.
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        /// Build a transport, optionally giving up on requests after `timeout`.
        ///
        /// Fails when the TLS backend or system configuration cannot be loaded.
        pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
            let mut builder = reqwest::Client::builder();
            if let Some(timeout) = timeout {
                builder = builder.timeout(timeout);
            }
            Ok(Self { client: builder.build()? })
        }

        pub fn from_client(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    impl Transport for ReqwestTransport {
        async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            let mut builder = self.client.get(&request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            let response = builder.send().await.map_err(map_transport_error)?;
            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|value| (name.as_str().to_string(), value.to_string()))
                })
                .collect();
            let body = response.text().await.map_err(map_transport_error)?;

            Ok(HttpResponse { status, headers, body })
        }
    }

    fn map_transport_error(err: reqwest::Error) -> TransportError {
        let code = if err.is_timeout() {
            Status::from("ETIMEDOUT")
        } else if err.is_connect() {
            Status::from("ECONNREFUSED")
        } else if err.is_builder() {
            Status::from("ERR_BAD_REQUEST")
        } else if err.is_body() || err.is_decode() {
            Status::from("ERR_BAD_RESPONSE")
        } else {
            Status::from("ERR_NETWORK")
        };
        TransportError::new(Some(code), err.to_string())
    }

}
