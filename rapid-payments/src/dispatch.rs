//! Routing of logical intents to wire operations
//!
//! Pure decisions with no I/O, so every row of the routing table can be
//! checked without a gateway.

use crate::error::{RapidError, RapidResult};
use crate::types::{PaymentMethod, Transaction, TransactionFilter};
use crate::wire::Method;
use std::fmt;

/// Wire operation and method tag chosen for a new transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionRoute {
    /// `POST Transaction`
    DirectPayment(Method),
    /// `POST AccessCodes`
    AccessCode(Method),
    /// `POST AccessCodesShared`
    AccessCodeShared(Method),
    /// `POST Transaction` as an authorisation; always tagged `Authorise`
    DirectAuthorisation,
}

impl TransactionRoute {
    /// Pick the route for creating `transaction` with `payment_method`.
    pub fn resolve(payment_method: PaymentMethod, transaction: &Transaction) -> Self {
        let tokenize = transaction.token().is_some() || transaction.save_customer;

        match (payment_method, transaction.capture) {
            (PaymentMethod::Direct, true) if tokenize => Self::DirectPayment(Method::TokenPayment),
            (PaymentMethod::Direct, true) => Self::DirectPayment(Method::ProcessPayment),
            (PaymentMethod::Direct, false) => Self::DirectPayment(Method::Authorise),

            (PaymentMethod::TransparentRedirect, true) if tokenize => {
                Self::AccessCode(Method::TokenPayment)
            }
            (PaymentMethod::TransparentRedirect, true) => {
                Self::AccessCode(Method::CreateTokenCustomer)
            }
            (PaymentMethod::TransparentRedirect, false) => Self::AccessCode(Method::Authorise),

            (PaymentMethod::ResponsiveShared, true) if tokenize => {
                Self::AccessCodeShared(Method::TokenPayment)
            }
            (PaymentMethod::ResponsiveShared, true) => {
                Self::AccessCodeShared(Method::CreateTokenCustomer)
            }
            (PaymentMethod::ResponsiveShared, false) => Self::AccessCodeShared(Method::Authorise),

            (PaymentMethod::Authorisation, _) => Self::DirectAuthorisation,

            (PaymentMethod::Wallet, true) => Self::DirectPayment(Method::ProcessPayment),
            (PaymentMethod::Wallet, false) => Self::DirectAuthorisation,
        }
    }

    /// Method tag sent on the wire.
    pub fn method(&self) -> Method {
        match self {
            Self::DirectPayment(method) | Self::AccessCode(method) | Self::AccessCodeShared(method) => {
                *method
            }
            Self::DirectAuthorisation => Method::Authorise,
        }
    }
}

impl fmt::Display for TransactionRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectPayment(_) => write!(f, "direct payment"),
            Self::AccessCode(_) => write!(f, "access code"),
            Self::AccessCodeShared(_) => write!(f, "shared access code"),
            Self::DirectAuthorisation => write!(f, "direct authorisation"),
        }
    }
}

/// Wire operation used to create or update a token customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerRoute {
    DirectPayment,
    AccessCode,
    AccessCodeShared,
}

impl CustomerRoute {
    /// Only Direct, TransparentRedirect and ResponsiveShared manage customers.
    pub fn resolve(payment_method: PaymentMethod) -> RapidResult<Self> {
        match payment_method {
            PaymentMethod::Direct => Ok(Self::DirectPayment),
            PaymentMethod::TransparentRedirect => Ok(Self::AccessCode),
            PaymentMethod::ResponsiveShared => Ok(Self::AccessCodeShared),
            other => Err(RapidError::UnsupportedOperation(format!(
                "{:?} cannot create or update customers",
                other
            ))),
        }
    }
}

/// The single dimension a valid [`TransactionFilter`] searches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionLookup<'a> {
    TransactionId(i64),
    AccessCode(&'a str),
    InvoiceReference(&'a str),
    InvoiceNumber(&'a str),
}

impl TransactionFilter {
    /// Exactly one well formed dimension. Absent, blank or non-positive
    /// dimensions are ignored.
    pub fn is_valid(&self) -> bool {
        let dimensions = [
            self.transaction_id.is_some_and(|id| id > 0),
            well_formed(&self.access_code).is_some(),
            well_formed(&self.invoice_reference).is_some(),
            well_formed(&self.invoice_number).is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count();

        dimensions == 1
    }

    /// First well formed dimension, in order: transaction id, access code,
    /// invoice reference, invoice number.
    pub fn lookup(&self) -> Option<TransactionLookup<'_>> {
        if let Some(id) = self.transaction_id.filter(|id| *id > 0) {
            return Some(TransactionLookup::TransactionId(id));
        }
        if let Some(code) = well_formed(&self.access_code) {
            return Some(TransactionLookup::AccessCode(code));
        }
        if let Some(reference) = well_formed(&self.invoice_reference) {
            return Some(TransactionLookup::InvoiceReference(reference));
        }
        well_formed(&self.invoice_number).map(TransactionLookup::InvoiceNumber)
    }
}

fn well_formed(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
