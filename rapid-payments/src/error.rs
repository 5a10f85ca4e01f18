//! Error types for the Rapid client
//!
//! Gateway and validation failures are never returned as `Err`; they travel
//! as error codes inside the response. `RapidError` only covers the few
//! cases where there is no response to put a code into.

use rapid_http_client::HttpClientError;
use thiserror::Error;

/// Rapid client errors
#[derive(Error, Debug)]
pub enum RapidError {
    /// The payment method cannot be used for the requested operation
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// The default HTTP transport could not be built
    #[error("Transport error: {0}")]
    Transport(#[from] HttpClientError),
}

impl From<toml::de::Error> for RapidError {
    fn from(err: toml::de::Error) -> Self {
        RapidError::Config(err.to_string())
    }
}

/// Result type for Rapid client operations
pub type RapidResult<T> = Result<T, RapidError>;
