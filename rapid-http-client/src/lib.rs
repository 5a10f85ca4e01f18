//! # Rapid HTTP Client
//!
//! The transport layer underneath the Rapid gateway client. The gateway never
//! talks to reqwest directly; it hands a fully formed [`TransportRequest`] to
//! something implementing [`Transport`] and gets back either the raw response
//! text or an [`HttpClientError`].
//!
//! ## Features
//!
//! - **Injectable**: the gateway depends on the [`Transport`] trait, so tests
//!   substitute a scripted fake and production uses [`HttpClient`]
//! - **Timeouts**: whole-request and connection timeouts
//! - **Connection Pooling**: connection reuse through reqwest
//! - **Compression**: gzip/brotli response decoding
//! - **No redirects**: a redirected payment call fails instead of replaying
//!
//! A failed call is reported once; there is no retry layer.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rapid_http_client::{HttpClient, HttpClientConfig, Method, Transport, TransportRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpClient::new(HttpClientConfig::default())?;
//!
//!     let body = client
//!         .send(TransportRequest::new(Method::GET, "https://api.sandbox.ewaypayments.com/Transaction/1"))
//!         .await?;
//!
//!     println!("{body}");
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;
mod transport;

pub use client::HttpClient;
pub use config::{HttpClientConfig, HttpClientConfigBuilder};
pub use error::{HttpClientError, Result};
pub use transport::{Transport, TransportRequest};

pub use http::{Method, StatusCode};
