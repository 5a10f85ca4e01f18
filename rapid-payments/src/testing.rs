//! Test doubles for the Rapid client
//!
//! Available in this crate's tests and, for downstream crates, behind the
//! `testing` feature.
//!
//! ```
//! use rapid_payments::testing::MockTransport;
//! use rapid_payments::{BaseResponse, RapidClient, RapidConfig};
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let transport = MockTransport::new().reply_status(401);
//! let client = RapidClient::with_transport(
//!     &RapidConfig::new("key", "password", "Sandbox"),
//!     Arc::new(transport.clone()),
//! );
//!
//! let response = client.query_transaction_by_id(11223344).await;
//! assert_eq!(response.errors().unwrap(), ["S9993"]);
//! assert_eq!(transport.call_count(), 1);
//! # });
//! ```

use async_trait::async_trait;
use parking_lot::Mutex;
use rapid_http_client::{HttpClientError, Transport, TransportRequest};
use std::collections::VecDeque;
use std::sync::Arc;

enum Reply {
    Body(String),
    Status(u16),
    Unreachable,
}

/// Scripted transport that records every request it receives.
///
/// Replies are consumed in the order they were scripted. Once the script
/// runs out every call answers `{}`.
#[derive(Clone, Default)]
pub struct MockTransport {
    calls: Arc<Mutex<Vec<TransportRequest>>>,
    replies: Arc<Mutex<VecDeque<Reply>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the next call with `body` and a success status.
    pub fn reply(self, body: impl Into<String>) -> Self {
        self.replies.lock().push_back(Reply::Body(body.into()));
        self
    }

    /// Answer the next call with a JSON document.
    pub fn reply_json(self, body: serde_json::Value) -> Self {
        self.reply(body.to_string())
    }

    /// Answer the next call with a failed response carrying `status`.
    pub fn reply_status(self, status: u16) -> Self {
        self.replies.lock().push_back(Reply::Status(status));
        self
    }

    /// Fail the next call without any response.
    pub fn reply_unreachable(self) -> Self {
        self.replies.lock().push_back(Reply::Unreachable);
        self
    }

    /// Number of requests received
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// All requests received, oldest first
    pub fn calls(&self) -> Vec<TransportRequest> {
        self.calls.lock().clone()
    }

    pub fn last_call(&self) -> Option<TransportRequest> {
        self.calls.lock().last().cloned()
    }

    /// Body of the most recent request, parsed as JSON.
    pub fn last_body(&self) -> Option<serde_json::Value> {
        self.last_call()?
            .body
            .and_then(|body| serde_json::from_str(&body).ok())
    }

    /// Check whether any request went to a URL ending in `suffix`.
    pub fn was_called(&self, suffix: &str) -> bool {
        self.calls.lock().iter().any(|call| call.url.ends_with(suffix))
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: TransportRequest) -> rapid_http_client::Result<String> {
        self.calls.lock().push(request);

        match self.replies.lock().pop_front() {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Status(status)) => Err(HttpClientError::Response {
                status,
                message: String::new(),
            }),
            Some(Reply::Unreachable) => Err(HttpClientError::Connection(
                "connection refused".to_string(),
            )),
            None => Ok("{}".to_string()),
        }
    }
}
