//! Response bodies, one per wire operation
//!
//! Every field is optional on the way in: an error response may leave out
//! anything but `Errors`.

use super::{
    impl_wire_response, lenient_id, nullable, BeagleVerification, DirectTokenCustomer, OptionValue,
    Payment, RefundDetails, SettlementSummary, SettlementTransaction, ShippingAddress,
    TokenCustomer, Verification,
};
use serde::Deserialize;

/// Response to a direct payment
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DirectPaymentResponse {
    pub authorisation_code: Option<String>,
    pub response_code: Option<String>,
    pub response_message: Option<String>,
    #[serde(rename = "TransactionID")]
    pub transaction_id: Option<i64>,
    pub transaction_status: Option<bool>,
    pub transaction_type: Option<String>,
    pub beagle_score: Option<f64>,
    pub fraud_action: Option<String>,
    pub transaction_captured: Option<bool>,
    pub verification: Option<Verification>,
    pub beagle_verification: Option<BeagleVerification>,
    pub customer: Option<DirectTokenCustomer>,
    pub payment: Option<Payment>,
    pub errors: Option<String>,
}

/// Response to a direct authorisation. Same shape as a direct payment.
pub type DirectAuthorisationResponse = DirectPaymentResponse;

/// Response to an access code request
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateAccessCodeResponse {
    pub access_code: Option<String>,
    pub customer: Option<TokenCustomer>,
    pub payment: Option<Payment>,
    #[serde(rename = "FormActionURL")]
    pub form_action_url: Option<String>,
    #[serde(rename = "CompleteCheckoutURL")]
    pub complete_checkout_url: Option<String>,
    #[serde(rename = "AmexECEncryptedData")]
    pub amex_ec_encrypted_data: Option<String>,
    pub errors: Option<String>,
}

/// Response to a shared page access code request
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateAccessCodeSharedResponse {
    pub access_code: Option<String>,
    pub customer: Option<TokenCustomer>,
    pub payment: Option<Payment>,
    #[serde(rename = "FormActionURL")]
    pub form_action_url: Option<String>,
    #[serde(rename = "CompleteCheckoutURL")]
    pub complete_checkout_url: Option<String>,
    #[serde(rename = "AmexECEncryptedData")]
    pub amex_ec_encrypted_data: Option<String>,
    pub shared_payment_url: Option<String>,
    pub errors: Option<String>,
}

/// Response to `GET AccessCode/{id}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetAccessCodeResultResponse {
    pub access_code: Option<String>,
    pub authorisation_code: Option<String>,
    pub response_code: Option<String>,
    pub response_message: Option<String>,
    pub invoice_number: Option<String>,
    pub invoice_reference: Option<String>,
    pub total_amount: Option<i32>,
    #[serde(rename = "TransactionID")]
    pub transaction_id: Option<i64>,
    pub transaction_status: Option<bool>,
    #[serde(rename = "TokenCustomerID", deserialize_with = "lenient_id")]
    pub token_customer_id: Option<i64>,
    pub beagle_score: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub options: Vec<OptionValue>,
    pub verification: Option<Verification>,
    pub beagle_verification: Option<BeagleVerification>,
    pub errors: Option<String>,
}

/// A single transaction inside a query response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransactionResult {
    pub authorisation_code: Option<String>,
    pub response_code: Option<String>,
    pub response_message: Option<String>,
    pub invoice_number: Option<String>,
    pub invoice_reference: Option<String>,
    pub total_amount: Option<i32>,
    #[serde(rename = "TransactionID")]
    pub transaction_id: Option<i64>,
    pub transaction_status: Option<bool>,
    pub transaction_captured: Option<bool>,
    #[serde(rename = "TokenCustomerID", deserialize_with = "lenient_id")]
    pub token_customer_id: Option<i64>,
    pub beagle_score: Option<f64>,
    pub fraud_action: Option<String>,
    pub currency_code: Option<String>,
    pub max_refund: Option<i32>,
    #[serde(rename = "OriginalTransactionId")]
    pub original_transaction_id: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub options: Vec<OptionValue>,
    pub verification: Option<Verification>,
    pub beagle_verification: Option<BeagleVerification>,
    pub customer: Option<DirectTokenCustomer>,
    pub shipping_address: Option<ShippingAddress>,
}

/// Response to the `Transaction/...` lookups
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransactionSearchResponse {
    #[serde(deserialize_with = "nullable")]
    pub transactions: Vec<TransactionResult>,
    pub errors: Option<String>,
}

/// Response to `GET Customer/{id}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DirectCustomerSearchResponse {
    #[serde(deserialize_with = "nullable")]
    pub customers: Vec<DirectTokenCustomer>,
    pub errors: Option<String>,
}

/// Response to a refund
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DirectRefundResponse {
    pub authorisation_code: Option<String>,
    pub response_code: Option<String>,
    pub response_message: Option<String>,
    #[serde(rename = "TransactionID")]
    pub transaction_id: Option<i64>,
    pub transaction_status: Option<bool>,
    pub verification: Option<Verification>,
    pub customer: Option<DirectTokenCustomer>,
    pub refund: Option<RefundDetails>,
    pub errors: Option<String>,
}

/// Response to a capture
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DirectCapturePaymentResponse {
    pub response_code: Option<String>,
    pub response_message: Option<String>,
    #[serde(rename = "TransactionID")]
    pub transaction_id: Option<i64>,
    pub transaction_status: Option<bool>,
    pub errors: Option<String>,
}

/// Response to a cancellation
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DirectCancelAuthorisationResponse {
    pub response_code: Option<String>,
    pub response_message: Option<String>,
    #[serde(rename = "TransactionID")]
    pub transaction_id: Option<i64>,
    pub transaction_status: Option<bool>,
    pub errors: Option<String>,
}

/// Response to `GET Search/Settlement`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DirectSettlementSearchResponse {
    #[serde(deserialize_with = "nullable")]
    pub settlement_summaries: Vec<SettlementSummary>,
    #[serde(deserialize_with = "nullable")]
    pub settlement_transactions: Vec<SettlementTransaction>,
    pub errors: Option<String>,
}

impl_wire_response!(
    DirectPaymentResponse,
    CreateAccessCodeResponse,
    CreateAccessCodeSharedResponse,
    GetAccessCodeResultResponse,
    TransactionSearchResponse,
    DirectCustomerSearchResponse,
    DirectRefundResponse,
    DirectCapturePaymentResponse,
    DirectCancelAuthorisationResponse,
    DirectSettlementSearchResponse,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::WireResponse;

    #[test]
    fn test_direct_payment_response() {
        let body = r#"{
            "AuthorisationCode": "803553",
            "ResponseCode": "00",
            "ResponseMessage": "A2000",
            "TransactionID": 11223344,
            "TransactionStatus": true,
            "TransactionType": "Purchase",
            "BeagleScore": 0,
            "Verification": {"CVN": 0, "Address": 0, "Email": 0, "Mobile": 0, "Phone": 0},
            "Customer": {
                "CardDetails": {"Number": "444433XXXXXX1111", "Name": "John Smith", "ExpiryMonth": "12", "ExpiryYear": "25"},
                "TokenCustomerID": null,
                "FirstName": "John",
                "Street1": "Level 5",
                "City": "Sydney",
                "Country": "au"
            },
            "Payment": {"TotalAmount": 1000, "InvoiceNumber": "Inv 21540", "CurrencyCode": "AUD"},
            "Errors": null
        }"#;

        let response: DirectPaymentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.transaction_id, Some(11223344));
        assert_eq!(response.transaction_status, Some(true));
        assert_eq!(response.errors(), None);

        let customer = response.customer.unwrap();
        assert_eq!(customer.token_customer_id, None);
        assert_eq!(customer.fields.city.as_deref(), Some("Sydney"));
        assert_eq!(
            customer.card_details.unwrap().number.as_deref(),
            Some("444433XXXXXX1111")
        );
    }

    #[test]
    fn test_shared_response_urls() {
        let body = r#"{
            "SharedPaymentUrl": "https://secure.sandbox.ewaypayments.com/sharedpage/sharedpayment?AccessCode=F9802j0",
            "AccessCode": "F9802j0",
            "Customer": {"TokenCustomerID": 917758625852, "CardNumber": "", "FirstName": "John"},
            "Payment": {"TotalAmount": 1000},
            "FormActionURL": "https://secure.sandbox.ewaypayments.com/AccessCode/F9802j0",
            "Errors": ""
        }"#;

        let response: CreateAccessCodeSharedResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.access_code.as_deref(), Some("F9802j0"));
        assert!(response.shared_payment_url.as_deref().unwrap().ends_with("AccessCode=F9802j0"));
        assert_eq!(response.customer.as_ref().unwrap().token_customer_id, Some(917758625852));
        assert_eq!(response.errors(), Some(""));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let response: DirectCapturePaymentResponse =
            serde_json::from_str(r#"{"ResponseMessage":"A2000","Surprise":[1,2]}"#).unwrap();
        assert_eq!(response.response_message.as_deref(), Some("A2000"));
    }
}
