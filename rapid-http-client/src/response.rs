//! Buffered response.

use crate::{HttpClientError, Result};
use bytes::Bytes;
use http::StatusCode;

#[derive(Debug)]
pub(crate) struct Response {
    status: StatusCode,
    body: Bytes,
}

impl Response {
    pub(crate) async fn from_reqwest(response: reqwest::Response) -> Self {
        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read response body");
                Bytes::new()
            }
        };

        Self { status, body }
    }

    pub(crate) fn status(&self) -> StatusCode {
        self.status
    }

    pub(crate) fn into_text(self) -> Result<String> {
        String::from_utf8(self.body.to_vec()).map_err(|e| HttpClientError::Decode(e.to_string()))
    }

    /// Turn a 4xx/5xx response into [`HttpClientError::Response`].
    pub(crate) fn error_for_status(self) -> Result<Self> {
        if self.status.is_client_error() || self.status.is_server_error() {
            let message = String::from_utf8_lossy(&self.body).into_owned();
            Err(HttpClientError::Response {
                status: self.status.as_u16(),
                message,
            })
        } else {
            Ok(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_for_status_keeps_body() {
        let response = Response {
            status: StatusCode::FORBIDDEN,
            body: Bytes::from_static(b"denied"),
        };
        match response.error_for_status() {
            Err(HttpClientError::Response { status, message }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "denied");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_is_a_decode_error() {
        let response = Response {
            status: StatusCode::OK,
            body: Bytes::from_static(&[0xff, 0xfe]),
        };
        assert!(matches!(response.into_text(), Err(HttpClientError::Decode(_))));
    }
}
