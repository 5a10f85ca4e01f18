//! Gateway wire shapes
//!
//! One request and one response type per wire operation, named after the
//! gateway's own objects. Field names follow the gateway's JSON exactly;
//! `None` fields are omitted when serializing and enums go out as their
//! names.

mod model;
mod request;
mod response;

pub use model::*;
pub use request::*;
pub use response::*;

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

/// Method tag telling the gateway what to do with a payment request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    #[default]
    ProcessPayment,
    CreateTokenCustomer,
    UpdateTokenCustomer,
    TokenPayment,
    Authorise,
}

/// Requests that carry a [`Method`] tag.
pub trait MethodTagged {
    fn set_method(&mut self, method: Method);
}

/// The error-bearing part of every wire response.
pub trait WireResponse: DeserializeOwned + Default + Send {
    /// Comma separated error codes, if any.
    fn errors(&self) -> Option<&str>;

    fn set_errors(&mut self, errors: String);

    /// A response carrying only `code`, used when the gateway gave us nothing usable.
    fn from_error(code: &str) -> Self {
        let mut response = Self::default();
        response.set_errors(code.to_string());
        response
    }
}

macro_rules! impl_wire_response {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::wire::WireResponse for $ty {
                fn errors(&self) -> Option<&str> {
                    self.errors.as_deref()
                }

                fn set_errors(&mut self, errors: String) {
                    self.errors = Some(errors);
                }
            }
        )+
    };
}
pub(crate) use impl_wire_response;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Integer(i64),
    Float(f64),
}

/// Accept an identifier sent either as a string or as a number.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.and_then(|value| match value {
            StringOrNumber::String(s) if s.trim().is_empty() => None,
            StringOrNumber::String(s) => Some(s),
            StringOrNumber::Integer(n) => Some(n.to_string()),
            StringOrNumber::Float(f) => Some(f.to_string()),
        }),
    )
}

/// Accept a numeric identifier sent either as a number or as a string of digits.
pub(crate) fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.and_then(|value| match value {
            StringOrNumber::String(s) => s.trim().parse().ok(),
            StringOrNumber::Integer(n) => Some(n),
            StringOrNumber::Float(_) => None,
        }),
    )
}

/// Treat an explicit `null` as the type's default.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_serializes_as_name() {
        assert_eq!(
            serde_json::to_string(&Method::UpdateTokenCustomer).unwrap(),
            "\"UpdateTokenCustomer\""
        );
    }

    #[test]
    fn test_token_customer_id_as_number_or_string() {
        let customer: DirectTokenCustomer =
            serde_json::from_str(r#"{"TokenCustomerID":917758625852,"FirstName":"John"}"#).unwrap();
        assert_eq!(customer.token_customer_id.as_deref(), Some("917758625852"));
        assert_eq!(customer.fields.first_name.as_deref(), Some("John"));

        let customer: TokenCustomer =
            serde_json::from_str(r#"{"TokenCustomerID":"917758625852"}"#).unwrap();
        assert_eq!(customer.token_customer_id, Some(917758625852));

        let customer: TokenCustomer = serde_json::from_str(r#"{"TokenCustomerID":null}"#).unwrap();
        assert_eq!(customer.token_customer_id, None);
    }

    #[test]
    fn test_nullable_collections() {
        let response: DirectCustomerSearchResponse =
            serde_json::from_str(r#"{"Customers":null,"Errors":"V6040"}"#).unwrap();
        assert!(response.customers.is_empty());
        assert_eq!(response.errors(), Some("V6040"));
    }

    #[test]
    fn test_from_error() {
        let response = DirectPaymentResponse::from_error("S9992");
        assert_eq!(response.errors(), Some("S9992"));
        assert!(response.transaction_id.is_none());
    }
}
