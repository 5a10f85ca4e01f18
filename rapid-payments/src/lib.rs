//! eWAY Rapid client for the Rapid SDK
//!
//! Create and query transactions, manage token customers, refund, capture
//! and cancel authorisations, and search settlements against the eWAY Rapid
//! API.
//!
//! ## Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          RapidClient                             │
//! │  pre-flight gate ─► dispatch ─► mapping ─► gateway ─► mapping    │
//! └─────────────────────────────────────────────────────────────────┘
//!                                   │
//!                                   ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         RapidGateway                             │
//! │  endpoint | credentials | API version | sticky auth failure      │
//! └─────────────────────────────────────────────────────────────────┘
//!                                   │
//!                                   ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  Transport (rapid-http-client)                   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rapid_payments::{
//!     BaseResponse, CardDetails, Customer, PaymentMethod, RapidClient, RapidConfig, Transaction,
//! };
//!
//! # async fn run() -> rapid_payments::RapidResult<()> {
//! let client = RapidClient::new(&RapidConfig::new("API key", "API password", "Sandbox"))?;
//!
//! let customer = Customer {
//!     card_details: Some(CardDetails::new("John Smith", "4444333322221111", "12", "25", "123")),
//!     ..Default::default()
//! };
//! let response = client
//!     .create_transaction(PaymentMethod::Direct, &Transaction::new(customer, 1000))
//!     .await;
//!
//! match response.errors() {
//!     Some(codes) => println!("failed: {:?}", codes),
//!     None => println!("approved: {:?}", response.transaction_status),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every result carries an optional list of error codes. Codes are either
//! passed through from the gateway or produced locally (`S99xx`, see
//! [`codes`]). [`user_display_message`] turns a code into display text.

pub mod client;
pub mod codes;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod gateway;
pub mod mapping;
pub mod response;
pub mod search;
pub mod types;
pub mod wire;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use client::RapidClient;
pub use codes::{ErrorCategory, user_display_message, user_display_messages};
pub use config::{Endpoint, RapidConfig};
pub use error::*;
pub use gateway::RapidGateway;
pub use response::*;
pub use types::*;
