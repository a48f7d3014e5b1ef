//! Shared helpers for the core integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Mutex;

use fnapi_core::{ClientConfig, FortniteClient, HttpRequest, HttpResponse, Status, Transport, TransportError};
use serde_json::{json, Value};

/// Transport that answers every request with the same canned outcome and
/// records what it was asked.
pub struct MockTransport {
    reply: Result<HttpResponse, TransportError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new(reply: Result<HttpResponse, TransportError>) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 200 with `data` inside the upstream envelope.
    pub fn enveloped(data: Value) -> Self {
        let body = json!({ "status": 200, "data": data }).to_string();
        Self::new(Ok(HttpResponse::new(200, body)))
    }

    /// Transport-level rejection carrying an HTTP status code.
    pub fn rejecting(code: u16, message: &str) -> Self {
        Self::new(Err(TransportError::new(Some(Status::Http(code)), message)))
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_url(&self) -> String {
        self.requests().last().map(|r| r.url.clone()).unwrap_or_default()
    }
}

impl Transport for MockTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone()
    }
}

pub const MOCK_BASE: &str = "https://fortnite-api.com";

pub fn mock_client(transport: MockTransport) -> FortniteClient<MockTransport> {
    FortniteClient::with_transport(&ClientConfig::new(MOCK_BASE), transport)
}

/// Start the mock server on a random port in a background thread.
pub fn spawn_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}
