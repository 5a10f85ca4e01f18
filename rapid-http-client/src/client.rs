//! reqwest-backed transport.

use http::Method;
use reqwest::Request;
use std::sync::Arc;
use tracing::debug;

use crate::request::RequestBuilder;
use crate::response::Response;
use crate::{HttpClientConfig, HttpClientError, Result};

/// reqwest-backed HTTP client.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct HttpClient {
    pub(crate) inner: reqwest::Client,
    config: Arc<HttpClientConfig>,
}

impl HttpClient {
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let inner = config
            .client_builder()
            .build()
            .map_err(|e| HttpClientError::RequestBuild(e.to_string()))?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    pub(crate) fn request(&self, method: Method, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, method, url.into())
    }

    /// Execute a request exactly once.
    pub(crate) async fn execute(&self, request: Request) -> Result<Response> {
        debug!(method = %request.method(), url = %request.url(), "Sending HTTP request");

        let response = self.inner.execute(request).await.map_err(|e| {
            if e.is_timeout() {
                HttpClientError::Timeout(self.config.timeout)
            } else if e.is_connect() {
                HttpClientError::Connection(e.to_string())
            } else {
                HttpClientError::Http(e)
            }
        })?;

        let response = Response::from_reqwest(response).await;
        debug!(status = %response.status(), "Received HTTP response");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_keeps_config() {
        let config = HttpClientConfig::builder()
            .timeout(Duration::from_secs(60))
            .build();

        let client = HttpClient::new(config).unwrap();
        assert_eq!(client.config().timeout, Duration::from_secs(60));
        assert!(client.config().compression);
    }
}
