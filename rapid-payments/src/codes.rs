//! Rapid error and response codes
//!
//! Every code the gateway or this library can report is a short string. The
//! first letter gives its [`ErrorCategory`]; the `S999x` codes are produced
//! locally, before or instead of a gateway round trip.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Endpoint is missing or not an absolute URL
pub const INVALID_ENDPOINT_ERROR: &str = "S9990";
/// API key or password is blank
pub const INVALID_CREDENTIAL_ERROR: &str = "S9991";
/// The gateway could not be reached, or answered with something unusable
pub const COMMUNICATION_ERROR: &str = "S9992";
/// The gateway rejected the credentials
pub const AUTHENTICATION_ERROR: &str = "S9993";
/// The library could not build or route the request
pub const INTERNAL_SDK_ERROR: &str = "S9995";
/// The gateway reported an internal failure
pub const SERVER_ERROR: &str = "S9996";

/// Message returned for codes that are not in the vocabulary
pub const INVALID_ERROR_CODE_MESSAGE: &str = "Invalid Error Code";

/// Broad classification of a code by its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// `S`: library or gateway system status
    System,
    /// `V`: request validation
    Validation,
    /// `A`, `D` or `F`: approval, decline or fraud outcome of a transaction
    Transaction,
    /// Anything else
    Unknown,
}

impl ErrorCategory {
    /// Classify a code.
    pub fn of(code: &str) -> Self {
        match code.trim().chars().next() {
            Some('S') => Self::System,
            Some('V') => Self::Validation,
            Some('A' | 'D' | 'F') => Self::Transaction,
            _ => Self::Unknown,
        }
    }
}

static ENGLISH: &[(&str, &str)] = &[
    // system
    ("S5000", "System Error"),
    ("S5085", "Started 3dSecure"),
    ("S5086", "Routed 3dSecure"),
    ("S5087", "Completed 3dSecure"),
    ("S5099", "Incomplete (Access Code in progress/incomplete)"),
    (
        INVALID_ENDPOINT_ERROR,
        "Library does not have Endpoint initialised, or not initialise to a URL",
    ),
    (
        INVALID_CREDENTIAL_ERROR,
        "Library does not have API Key or Password Initialised",
    ),
    (COMMUNICATION_ERROR, "Error connecting to Rapid gateway"),
    (
        AUTHENTICATION_ERROR,
        "Rapid gateway could not authenticate the API Key or Password",
    ),
    (INTERNAL_SDK_ERROR, "Error converting data for the Rapid gateway"),
    (SERVER_ERROR, "Rapid gateway server error"),
    // validation
    (
        "V6010",
        "Invalid TransactionType, account not certified for eCome only MOTO or Recurring available",
    ),
    ("V6011", "Invalid Payment TotalAmount"),
    ("V6012", "Invalid Payment InvoiceDescription"),
    ("V6013", "Invalid Payment InvoiceReference"),
    ("V6014", "Invalid Payment InvoiceNumber"),
    ("V6015", "Invalid Payment CurrencyCode"),
    ("V6016", "Payment Required"),
    ("V6017", "Payment CurrencyCode Required"),
    ("V6018", "Unknown Payment CurrencyCode"),
    ("V6021", "EWAY_CARDHOLDERNAME Required"),
    ("V6022", "EWAY_CARDNUMBER Required"),
    ("V6023", "EWAY_CARDCVN Required"),
    ("V6033", "Invalid Expiry Date"),
    ("V6034", "Invalid Issue Number"),
    ("V6035", "Invalid Valid From Date"),
    ("V6040", "Invalid TokenCustomerID"),
    ("V6041", "Customer Required"),
    ("V6042", "Customer FirstName Required"),
    ("V6043", "Customer LastName Required"),
    ("V6044", "Customer CountryCode Required"),
    ("V6045", "Customer Title Required"),
    ("V6046", "TokenCustomerID Required"),
    ("V6047", "RedirectURL Required"),
    ("V6051", "Invalid Customer FirstName"),
    ("V6052", "Invalid Customer LastName"),
    ("V6053", "Invalid Customer CountryCode"),
    ("V6058", "Invalid Customer Title"),
    ("V6059", "Invalid RedirectURL"),
    ("V6060", "Invalid TokenCustomerID"),
    ("V6100", "Invalid EWAY_CARDNAME"),
    ("V6101", "Invalid EWAY_CARDEXPIRYMONTH"),
    ("V6102", "Invalid EWAY_CARDEXPIRYYEAR"),
    ("V6103", "Invalid EWAY_CARDSTARTMONTH"),
    ("V6104", "Invalid EWAY_CARDSTARTYEAR"),
    ("V6105", "Invalid EWAY_CARDISSUENUMBER"),
    ("V6106", "Invalid EWAY_CARDCVN"),
    ("V6107", "Invalid EWAY_ACCESSCODE"),
    ("V6108", "Invalid CustomerHostAddress"),
    ("V6109", "Invalid UserAgent"),
    ("V6110", "Invalid EWAY_CARDNUMBER"),
    ("V6111", "Unauthorised API Access, Account Not PCI Certified"),
    ("V6115", "Invalid DirectRefundRequest, Transaction ID"),
    ("V6116", "Invalid card data on original TransactionID"),
    // transaction outcome
    ("A2000", "Transaction Approved"),
    ("A2008", "Honour With Identification"),
    ("A2010", "Approved For Partial Amount"),
    ("A2011", "Approved, VIP"),
    ("A2016", "Approved, Update Track 3"),
    ("D4401", "Refer to Issuer"),
    ("D4402", "Refer to Issuer, special"),
    ("D4403", "No Merchant"),
    ("D4404", "Pick Up Card"),
    ("D4405", "Do Not Honour"),
    ("D4406", "Error"),
    ("D4412", "Invalid Transaction"),
    ("D4413", "Invalid Amount"),
    ("D4414", "Invalid Card Number"),
    ("D4451", "Insufficient Funds"),
    ("D4454", "Expired Card"),
    ("D4457", "Function Not Permitted"),
    ("F7000", "Undefined Fraud Error"),
    ("F7001", "Challenged Fraud"),
    ("F7002", "Country Match Fraud"),
    ("F7003", "High Risk Country Fraud"),
];

static MESSAGES: Lazy<HashMap<&'static str, HashMap<&'static str, &'static str>>> =
    Lazy::new(|| {
        let mut bundles = HashMap::new();
        bundles.insert("en", ENGLISH.iter().copied().collect());
        bundles
    });

const DEFAULT_LANGUAGE: &str = "en";

/// Look up the bundle for a language tag, trying `en-AU` then `en`.
fn bundle(language: &str) -> Option<&'static HashMap<&'static str, &'static str>> {
    let tag = language.trim().to_ascii_lowercase();
    if let Some(bundle) = MESSAGES.get(tag.as_str()) {
        return Some(bundle);
    }
    let primary = tag.split(['-', '_']).next().unwrap_or_default();
    MESSAGES.get(primary)
}

/// Human readable message for a code.
///
/// Falls back to English when the language has no entry, and to
/// [`INVALID_ERROR_CODE_MESSAGE`] when the code is unknown.
pub fn user_display_message(code: &str, language: &str) -> &'static str {
    let code = code.trim();
    bundle(language)
        .and_then(|b| b.get(code))
        .or_else(|| bundle(DEFAULT_LANGUAGE).and_then(|b| b.get(code)))
        .copied()
        .unwrap_or(INVALID_ERROR_CODE_MESSAGE)
}

/// Messages for a list of codes, in order.
pub fn user_display_messages(codes: &[String], language: &str) -> Vec<&'static str> {
    codes
        .iter()
        .map(|code| user_display_message(code, language))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_prefix() {
        assert_eq!(ErrorCategory::of(COMMUNICATION_ERROR), ErrorCategory::System);
        assert_eq!(ErrorCategory::of("V6011"), ErrorCategory::Validation);
        assert_eq!(ErrorCategory::of("A2000"), ErrorCategory::Transaction);
        assert_eq!(ErrorCategory::of("D4405"), ErrorCategory::Transaction);
        assert_eq!(ErrorCategory::of("F7000"), ErrorCategory::Transaction);
        assert_eq!(ErrorCategory::of(""), ErrorCategory::Unknown);
    }

    #[test]
    fn test_display_message() {
        assert_eq!(
            user_display_message("V6010", "en"),
            "Invalid TransactionType, account not certified for eCome only MOTO or Recurring available"
        );
        assert_eq!(
            user_display_message(INVALID_CREDENTIAL_ERROR, "en"),
            "Library does not have API Key or Password Initialised"
        );
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        assert_eq!(user_display_message("V6011", "fr"), "Invalid Payment TotalAmount");
        assert_eq!(user_display_message("V6011", "en-AU"), "Invalid Payment TotalAmount");
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(user_display_message("X0000", "en"), INVALID_ERROR_CODE_MESSAGE);
        assert_eq!(
            user_display_messages(&["A2000".into(), "nope".into()], "en"),
            vec!["Transaction Approved", INVALID_ERROR_CODE_MESSAGE]
        );
    }
}
