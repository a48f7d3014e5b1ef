//! Request normalization: one GET in, payload or failure record out.
//!
//! # Design
//! The upstream wraps every payload as `{ "status": 200, "data": T }` and the
//! transport wraps that body in its own `HttpResponse`. `parse_response`
//! peels both layers and returns `T` exactly as decoded. Every way a call
//! can go wrong (transport error, non-2xx status, undecodable body) comes
//! back as a `RequestFailure` value; nothing here panics or retries.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ApiResult, RequestFailure, Status};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

/// The upstream envelope. `data` is decoded as raw JSON first so a missing
/// key fails even when the payload type is an `Option`.
#[derive(Deserialize)]
struct Envelope {
    data: serde_json::Value,
}

/// Error body sent by the upstream alongside non-2xx statuses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Execute `request` once through `transport` and normalize the outcome.
#[tracing::instrument(level = "debug", skip_all, fields(url = %request.url))]
pub async fn handle_request<T, X>(transport: &X, request: HttpRequest) -> ApiResult<T>
where
    T: DeserializeOwned,
    X: Transport,
{
    tracing::debug!("sending request");
    let result = match transport.get(&request).await {
        Ok(response) => parse_response(response),
        Err(err) => Err(RequestFailure::from(err)),
    };
    if let Err(failure) = &result {
        tracing::warn!(status = ?failure.status, error = %failure.error, "request failed");
    }
    result
}

/// Unwrap a transport response into the endpoint payload.
pub fn parse_response<T: DeserializeOwned>(response: HttpResponse) -> ApiResult<T> {
    if !response.is_success() {
        return Err(status_failure(&response));
    }
    serde_json::from_str::<Envelope>(&response.body)
        .and_then(|envelope| serde_json::from_value::<T>(envelope.data))
        .map_err(|e| {
            RequestFailure::new(
                Some(Status::Http(response.status)),
                format!("invalid response body: {e}"),
            )
        })
}

/// Map a non-2xx response to a failure, preferring the upstream's message.
fn status_failure(response: &HttpResponse) -> RequestFailure {
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .map(|body| body.error)
        .unwrap_or_else(|_| format!("Request failed with status code {}", response.status));
    RequestFailure::new(Some(Status::Http(response.status)), message)
}
