//! Unified result shapes
//!
//! Every result carries `errors`. Absent means success; when present, the
//! other fields are not guaranteed to be populated.

use crate::types::*;
use serde::{Deserialize, Serialize};

/// The error-bearing part shared by every result.
pub trait BaseResponse: Default {
    /// Error codes, in gateway order.
    fn errors(&self) -> Option<&[String]>;

    /// Replace the error codes.
    fn set_errors(&mut self, errors: Option<Vec<String>>);

    /// A result that carries only error codes.
    fn with_errors(errors: Vec<String>) -> Self {
        let mut response = Self::default();
        response.set_errors(Some(errors));
        response
    }

    /// True when no error code is present.
    fn is_success(&self) -> bool {
        self.errors().is_none_or(|errors| errors.is_empty())
    }
}

macro_rules! impl_base_response {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl BaseResponse for $ty {
                fn errors(&self) -> Option<&[String]> {
                    self.errors.as_deref()
                }

                fn set_errors(&mut self, errors: Option<Vec<String>>) {
                    self.errors = errors;
                }
            }
        )+
    };
}

/// Result of creating a transaction, by any payment method
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionResponse {
    pub transaction: Option<Transaction>,
    pub transaction_status: Option<TransactionStatus>,
    pub access_code: Option<String>,
    pub form_action_url: Option<String>,
    pub shared_payment_url: Option<String>,
    pub complete_checkout_url: Option<String>,
    pub amex_ec_encrypted_data: Option<String>,
    pub errors: Option<Vec<String>>,
}

/// Result of creating or updating a token customer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomerResponse {
    pub customer: Option<Customer>,
    pub access_code: Option<String>,
    pub form_action_url: Option<String>,
    pub shared_payment_url: Option<String>,
    pub complete_checkout_url: Option<String>,
    pub errors: Option<Vec<String>>,
}

/// Result of looking up a transaction or an access code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryTransactionResponse {
    pub transaction: Option<Transaction>,
    pub transaction_status: Option<TransactionStatus>,
    pub access_code: Option<String>,
    pub errors: Option<Vec<String>>,
}

/// Result of looking up a token customer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryCustomerResponse {
    pub customers: Vec<Customer>,
    pub errors: Option<Vec<String>>,
}

/// Result of a refund
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefundResponse {
    pub refund: Option<RefundDetails>,
    pub customer: Option<Customer>,
    pub transaction_status: Option<TransactionStatus>,
    pub errors: Option<Vec<String>>,
}

/// Result of capturing an authorisation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapturePaymentResponse {
    pub transaction_status: Option<TransactionStatus>,
    pub errors: Option<Vec<String>>,
}

/// Result of cancelling an authorisation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CancelAuthorisationResponse {
    pub transaction_status: Option<TransactionStatus>,
    pub errors: Option<Vec<String>>,
}

/// Result of a settlement search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementSearchResponse {
    pub settlement_summaries: Vec<SettlementSummary>,
    pub settlement_transactions: Vec<SettlementTransaction>,
    pub errors: Option<Vec<String>>,
}

impl_base_response!(
    CreateTransactionResponse,
    CreateCustomerResponse,
    QueryTransactionResponse,
    QueryCustomerResponse,
    RefundResponse,
    CapturePaymentResponse,
    CancelAuthorisationResponse,
    SettlementSearchResponse,
);
