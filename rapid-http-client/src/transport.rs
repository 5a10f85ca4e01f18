//! The transport seam used by the gateway.

use async_trait::async_trait;
use http::Method;

use crate::{HttpClient, Result};

/// A single outbound call, fully resolved by the caller.
///
/// The URL is absolute and every header the remote service needs is already
/// present; a transport only moves bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// HTTP verb.
    pub method: Method,
    /// Absolute request URL, query string included.
    pub url: String,
    /// Headers in insertion order.
    pub headers: Vec<(String, String)>,
    /// Serialized request payload, if any.
    pub body: Option<String>,
}

impl TransportRequest {
    /// Create a request without headers or body.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Append a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the payload.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Look up a header value by case-insensitive name.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Performs network calls on behalf of the gateway.
///
/// `Ok` carries the raw text of a successful (2xx) response, possibly empty.
/// A response with any other status must come back as
/// [`HttpClientError::Response`](crate::HttpClientError::Response) so the
/// status survives; failures that never produced a response use the other
/// variants.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute the request.
    async fn send(&self, request: TransportRequest) -> Result<String>;
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: TransportRequest) -> Result<String> {
        let mut builder = self.request(request.method, request.url);
        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        builder.send().await?.error_for_status()?.into_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HttpClientConfig, HttpClientError};
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> HttpClient {
        HttpClient::new(HttpClientConfig::default()).unwrap()
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = TransportRequest::new(Method::GET, "https://example.com/")
            .header("Content-Type", "application/json");

        assert_eq!(request.header_value("content-type"), Some("application/json"));
        assert_eq!(request.header_value("Authorization"), None);
    }

    #[tokio::test]
    async fn test_send_returns_body_and_forwards_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/Transaction"))
            .and(header("Authorization", "Basic a2V5OnB3"))
            .and(header("X-EWAY-APIVERSION", "40"))
            .and(body_string("{\"Method\":\"ProcessPayment\"}"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"TransactionID\":1}"))
            .expect(1)
            .mount(&server)
            .await;

        let request = TransportRequest::new(Method::POST, format!("{}/Transaction", server.uri()))
            .header("Authorization", "Basic a2V5OnB3")
            .header("X-EWAY-APIVERSION", "40")
            .body("{\"Method\":\"ProcessPayment\"}");

        let body = client().send(request).await.unwrap();
        assert_eq!(body, "{\"TransactionID\":1}");
    }

    #[tokio::test]
    async fn test_send_keeps_status_of_failed_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Customer/1"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let request = TransportRequest::new(Method::GET, format!("{}/Customer/1", server.uri()));
        let err = client().send(request).await.unwrap_err();

        assert!(matches!(err, HttpClientError::Response { status: 401, .. }));
        assert_eq!(err.status_code(), Some(401));
    }

    #[tokio::test]
    async fn test_send_empty_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let request = TransportRequest::new(Method::GET, format!("{}/AccessCode/abc", server.uri()));
        let body = client().send(request).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_host_has_no_status() {
        // Port 9 (discard) is closed on loopback in test environments.
        let request = TransportRequest::new(Method::GET, "http://127.0.0.1:9/Transaction/1");
        let err = client().send(request).await.unwrap_err();

        assert_eq!(err.status_code(), None);
    }
}
