//! Wire responses to unified results

use super::{
    Mapping, base_response, map, non_blank, options_from_wire, transaction_type_from_wire,
    verification_from_wire,
};
use crate::response::{
    CancelAuthorisationResponse, CapturePaymentResponse, CreateCustomerResponse,
    CreateTransactionResponse, QueryCustomerResponse, QueryTransactionResponse, RefundResponse,
    SettlementSearchResponse,
};
use crate::types::{
    BalanceSummaryPerCardType, Customer, PaymentDetails, ProcessingDetails, RefundDetails,
    SettlementSummary, SettlementTransaction, Transaction, TransactionStatus,
};
use crate::wire::{
    self, CreateAccessCodeResponse, CreateAccessCodeSharedResponse, DirectCancelAuthorisationResponse,
    DirectCapturePaymentResponse, DirectCustomerSearchResponse, DirectPaymentResponse,
    DirectRefundResponse, DirectSettlementSearchResponse, GetAccessCodeResultResponse,
    TransactionSearchResponse,
};

fn processing_details(
    authorisation_code: &Option<String>,
    response_code: &Option<String>,
    response_message: &Option<String>,
) -> Option<ProcessingDetails> {
    let details = ProcessingDetails {
        authorisation_code: non_blank(authorisation_code),
        response_code: non_blank(response_code),
        response_message: non_blank(response_message),
    };
    (details != ProcessingDetails::default()).then_some(details)
}

/// Status for responses that only report an outcome, without payment details.
fn outcome_status(
    transaction_id: Option<i64>,
    status: Option<bool>,
    response_code: &Option<String>,
    response_message: &Option<String>,
) -> Option<TransactionStatus> {
    transaction_id.map(|transaction_id| TransactionStatus {
        transaction_id,
        status,
        processing_details: processing_details(&None, response_code, response_message),
        ..Default::default()
    })
}

impl Mapping<DirectPaymentResponse> for CreateTransactionResponse {
    fn map_from(response: &DirectPaymentResponse) -> Self {
        let mut result: Self = base_response(response);

        let payment_details: Option<PaymentDetails> = response.payment.as_ref().map(map);
        result.transaction_status = response.transaction_id.map(|transaction_id| TransactionStatus {
            transaction_id,
            status: response.transaction_status,
            total: payment_details.as_ref().map_or(0, |p| p.total_amount),
            captured: response.transaction_captured,
            beagle_score: response.beagle_score,
            fraud_action: response.fraud_action.clone(),
            verification_result: verification_from_wire(
                response.verification.as_ref(),
                response.beagle_verification.as_ref(),
            ),
            processing_details: processing_details(
                &response.authorisation_code,
                &response.response_code,
                &response.response_message,
            ),
        });
        result.transaction = Some(Transaction {
            customer: response.customer.as_ref().map(map),
            payment_details,
            transaction_type: transaction_type_from_wire(response.transaction_type.as_deref()),
            capture: response.transaction_captured.unwrap_or(true),
            authorisation_code: non_blank(&response.authorisation_code),
            ..Default::default()
        });
        result
    }
}

impl Mapping<CreateAccessCodeResponse> for CreateTransactionResponse {
    fn map_from(response: &CreateAccessCodeResponse) -> Self {
        let mut result: Self = base_response(response);
        result.transaction = Some(Transaction {
            customer: response.customer.as_ref().map(map),
            payment_details: response.payment.as_ref().map(map),
            ..Default::default()
        });
        result.access_code = response.access_code.clone();
        result.form_action_url = response.form_action_url.clone();
        result.complete_checkout_url = response.complete_checkout_url.clone();
        result.amex_ec_encrypted_data = response.amex_ec_encrypted_data.clone();
        result
    }
}

impl Mapping<CreateAccessCodeSharedResponse> for CreateTransactionResponse {
    fn map_from(response: &CreateAccessCodeSharedResponse) -> Self {
        let mut result: Self = base_response(response);
        result.transaction = Some(Transaction {
            customer: response.customer.as_ref().map(map),
            payment_details: response.payment.as_ref().map(map),
            ..Default::default()
        });
        result.access_code = response.access_code.clone();
        result.form_action_url = response.form_action_url.clone();
        result.complete_checkout_url = response.complete_checkout_url.clone();
        result.amex_ec_encrypted_data = response.amex_ec_encrypted_data.clone();
        result.shared_payment_url = response.shared_payment_url.clone();
        result
    }
}

impl Mapping<DirectPaymentResponse> for CreateCustomerResponse {
    fn map_from(response: &DirectPaymentResponse) -> Self {
        let mut result: Self = base_response(response);
        result.customer = response.customer.as_ref().map(map);
        result
    }
}

impl Mapping<CreateAccessCodeResponse> for CreateCustomerResponse {
    fn map_from(response: &CreateAccessCodeResponse) -> Self {
        let mut result: Self = base_response(response);
        result.customer = response.customer.as_ref().map(map);
        result.access_code = response.access_code.clone();
        result.form_action_url = response.form_action_url.clone();
        result.complete_checkout_url = response.complete_checkout_url.clone();
        result
    }
}

impl Mapping<CreateAccessCodeSharedResponse> for CreateCustomerResponse {
    fn map_from(response: &CreateAccessCodeSharedResponse) -> Self {
        let mut result: Self = base_response(response);
        result.customer = response.customer.as_ref().map(map);
        result.access_code = response.access_code.clone();
        result.form_action_url = response.form_action_url.clone();
        result.complete_checkout_url = response.complete_checkout_url.clone();
        result.shared_payment_url = response.shared_payment_url.clone();
        result
    }
}

/// Rebuild a transaction from the scattered fields of a query result.
fn transaction_from_result(result: &wire::TransactionResult) -> Transaction {
    let mut customer: Customer = result.customer.as_ref().map(map).unwrap_or_default();
    if customer.token_customer_id.is_none() {
        customer.token_customer_id = result.token_customer_id.map(|id| id.to_string());
    }

    Transaction {
        customer: Some(customer),
        shipping_details: result.shipping_address.as_ref().map(map),
        payment_details: Some(PaymentDetails {
            total_amount: result.total_amount.unwrap_or_default(),
            invoice_number: result.invoice_number.clone(),
            invoice_reference: result.invoice_reference.clone(),
            currency_code: result.currency_code.clone(),
            ..Default::default()
        }),
        options: options_from_wire(&result.options),
        capture: result.transaction_captured.unwrap_or(true),
        authorisation_code: non_blank(&result.authorisation_code),
        max_refund: result.max_refund,
        original_transaction_id: result.original_transaction_id,
        ..Default::default()
    }
}

impl Mapping<TransactionSearchResponse> for QueryTransactionResponse {
    fn map_from(response: &TransactionSearchResponse) -> Self {
        let mut result: Self = base_response(response);
        if let Some(found) = response.transactions.first() {
            result.transaction_status = found.transaction_id.map(|transaction_id| {
                TransactionStatus {
                    transaction_id,
                    status: found.transaction_status,
                    total: found.total_amount.unwrap_or_default(),
                    captured: found.transaction_captured,
                    beagle_score: found.beagle_score,
                    fraud_action: found.fraud_action.clone(),
                    verification_result: verification_from_wire(
                        found.verification.as_ref(),
                        found.beagle_verification.as_ref(),
                    ),
                    processing_details: processing_details(
                        &found.authorisation_code,
                        &found.response_code,
                        &found.response_message,
                    ),
                }
            });
            result.transaction = Some(transaction_from_result(found));
        }
        result
    }
}

impl Mapping<GetAccessCodeResultResponse> for QueryTransactionResponse {
    fn map_from(response: &GetAccessCodeResultResponse) -> Self {
        let mut result: Self = base_response(response);
        result.access_code = response.access_code.clone();
        result.transaction_status = response.transaction_id.map(|transaction_id| {
            TransactionStatus {
                transaction_id,
                status: response.transaction_status,
                total: response.total_amount.unwrap_or_default(),
                beagle_score: response.beagle_score,
                verification_result: verification_from_wire(
                    response.verification.as_ref(),
                    response.beagle_verification.as_ref(),
                ),
                processing_details: processing_details(
                    &response.authorisation_code,
                    &response.response_code,
                    &response.response_message,
                ),
                ..Default::default()
            }
        });
        result.transaction = Some(Transaction {
            customer: Some(Customer {
                token_customer_id: response.token_customer_id.map(|id| id.to_string()),
                ..Default::default()
            }),
            payment_details: Some(PaymentDetails {
                total_amount: response.total_amount.unwrap_or_default(),
                invoice_number: response.invoice_number.clone(),
                invoice_reference: response.invoice_reference.clone(),
                ..Default::default()
            }),
            options: options_from_wire(&response.options),
            authorisation_code: non_blank(&response.authorisation_code),
            ..Default::default()
        });
        result
    }
}

impl Mapping<DirectCustomerSearchResponse> for QueryCustomerResponse {
    fn map_from(response: &DirectCustomerSearchResponse) -> Self {
        let mut result: Self = base_response(response);
        result.customers = response.customers.iter().map(map).collect();
        result
    }
}

impl Mapping<DirectRefundResponse> for RefundResponse {
    fn map_from(response: &DirectRefundResponse) -> Self {
        let mut result: Self = base_response(response);
        result.refund = response.refund.as_ref().map(|refund| RefundDetails {
            original_transaction_id: refund
                .transaction_id
                .as_deref()
                .and_then(|id| id.trim().parse().ok())
                .unwrap_or_default(),
            total_amount: refund.total_amount,
            invoice_number: refund.invoice_number.clone(),
            invoice_description: refund.invoice_description.clone(),
            invoice_reference: refund.invoice_reference.clone(),
            currency_code: refund.currency_code.clone(),
        });
        result.customer = response.customer.as_ref().map(map);
        result.transaction_status = response.transaction_id.map(|transaction_id| {
            TransactionStatus {
                transaction_id,
                status: response.transaction_status,
                total: response.refund.as_ref().map_or(0, |r| r.total_amount),
                verification_result: verification_from_wire(response.verification.as_ref(), None),
                processing_details: processing_details(
                    &response.authorisation_code,
                    &response.response_code,
                    &response.response_message,
                ),
                ..Default::default()
            }
        });
        result
    }
}

impl Mapping<DirectCapturePaymentResponse> for CapturePaymentResponse {
    fn map_from(response: &DirectCapturePaymentResponse) -> Self {
        let mut result: Self = base_response(response);
        result.transaction_status = outcome_status(
            response.transaction_id,
            response.transaction_status,
            &response.response_code,
            &response.response_message,
        );
        result
    }
}

impl Mapping<DirectCancelAuthorisationResponse> for CancelAuthorisationResponse {
    fn map_from(response: &DirectCancelAuthorisationResponse) -> Self {
        let mut result: Self = base_response(response);
        result.transaction_status = outcome_status(
            response.transaction_id,
            response.transaction_status,
            &response.response_code,
            &response.response_message,
        );
        result
    }
}

impl Mapping<wire::SettlementSummary> for SettlementSummary {
    fn map_from(summary: &wire::SettlementSummary) -> Self {
        Self {
            settlement_id: summary.settlement_id.clone(),
            currency: summary.currency.clone(),
            currency_code: summary.currency_code.clone(),
            total_credit: summary.total_credit,
            total_debit: summary.total_debit,
            total_balance: summary.total_balance,
            balance_per_card_type: summary
                .balance_per_card_type
                .iter()
                .map(|b| BalanceSummaryPerCardType {
                    card_type: b.card_type.clone(),
                    number_of_transactions: b.number_of_transactions,
                    credit: b.credit,
                    debit: b.debit,
                    balance: b.balance,
                })
                .collect(),
        }
    }
}

impl Mapping<wire::SettlementTransaction> for SettlementTransaction {
    fn map_from(transaction: &wire::SettlementTransaction) -> Self {
        Self {
            settlement_id: transaction.settlement_id.clone(),
            transaction_id: transaction.eway_transaction_id,
            transaction_type: transaction.transaction_type.clone(),
            card_type: transaction.card_type.clone(),
            currency: transaction.currency.clone(),
            currency_code: transaction.currency_code.clone(),
            amount: transaction.amount,
            transaction_date_time: transaction.transaction_date_time.clone(),
            settlement_date_time: transaction.settlement_date_time.clone(),
        }
    }
}

impl Mapping<DirectSettlementSearchResponse> for SettlementSearchResponse {
    fn map_from(response: &DirectSettlementSearchResponse) -> Self {
        let mut result: Self = base_response(response);
        result.settlement_summaries = response.settlement_summaries.iter().map(map).collect();
        result.settlement_transactions = response.settlement_transactions.iter().map(map).collect();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::BaseResponse;
    use crate::types::{Address, VerificationStatus};
    use crate::wire::{CustomerFields, DirectTokenCustomer, Payment, TokenCustomer};

    #[test]
    fn test_direct_payment_to_transaction_result() {
        let response = DirectPaymentResponse {
            authorisation_code: Some("803553".into()),
            response_code: Some("00".into()),
            response_message: Some("A2000".into()),
            transaction_id: Some(11_223_344),
            transaction_status: Some(true),
            verification: Some(wire::Verification {
                cvn: 1,
                ..Default::default()
            }),
            customer: Some(DirectTokenCustomer {
                fields: CustomerFields {
                    first_name: Some("John".into()),
                    city: Some("Sydney".into()),
                    ..Default::default()
                },
                ..Default::default()
            }),
            payment: Some(Payment {
                total_amount: 1000,
                ..Default::default()
            }),
            ..Default::default()
        };

        let result: CreateTransactionResponse = map(&response);
        assert!(result.is_success());

        let status = result.transaction_status.unwrap();
        assert_eq!(status.transaction_id, 11_223_344);
        assert_eq!(status.status, Some(true));
        assert_eq!(status.total, 1000);
        assert_eq!(
            status.verification_result.unwrap().cvn,
            VerificationStatus::Valid
        );
        assert_eq!(
            status.processing_details.unwrap().response_message.as_deref(),
            Some("A2000")
        );

        let customer = result.transaction.unwrap().customer.unwrap();
        assert_eq!(customer.address.unwrap().city.as_deref(), Some("Sydney"));
    }

    #[test]
    fn test_errors_map_before_fields() {
        let response = DirectPaymentResponse {
            errors: Some("V6011,V6059".into()),
            ..Default::default()
        };
        let result: CreateTransactionResponse = map(&response);
        assert_eq!(
            result.errors(),
            Some(&["V6011".to_string(), "V6059".to_string()][..])
        );
        assert!(result.transaction_status.is_none());
    }

    #[test]
    fn test_shared_response_unifies_with_access_code_response() {
        let customer = TokenCustomer {
            token_customer_id: Some(917_758_625_852),
            fields: CustomerFields {
                street1: Some("Level 5".into()),
                country: Some("au".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let shared = CreateAccessCodeSharedResponse {
            access_code: Some("F9802j0".into()),
            customer: Some(customer.clone()),
            shared_payment_url: Some("https://secure.sandbox.ewaypayments.com/sharedpage".into()),
            errors: Some("".into()),
            ..Default::default()
        };
        let plain = CreateAccessCodeResponse {
            access_code: Some("F9802j0".into()),
            customer: Some(customer),
            ..Default::default()
        };

        let from_shared: CreateTransactionResponse = map(&shared);
        let from_plain: CreateTransactionResponse = map(&plain);

        assert!(from_shared.errors.is_none());
        assert_eq!(from_shared.access_code, from_plain.access_code);
        assert_eq!(from_shared.transaction, from_plain.transaction);
        assert!(from_shared.shared_payment_url.is_some());
        assert!(from_plain.shared_payment_url.is_none());

        let customer = from_shared.transaction.unwrap().customer.unwrap();
        assert_eq!(customer.token_customer_id.as_deref(), Some("917758625852"));
        assert_eq!(
            customer.address,
            Some(Address {
                street1: Some("Level 5".into()),
                country: Some("au".into()),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_query_rebuilds_transaction() {
        let response: TransactionSearchResponse = serde_json::from_str(
            r#"{
                "Transactions": [{
                    "AuthorisationCode": "803553",
                    "ResponseCode": "00",
                    "ResponseMessage": "A2000",
                    "InvoiceNumber": "Inv 21540",
                    "InvoiceReference": "513456",
                    "TotalAmount": 1000,
                    "TransactionID": 11223344,
                    "TransactionStatus": true,
                    "TokenCustomerID": 917758625852,
                    "MaxRefund": 1000,
                    "Options": [{"Value": "Option1"}],
                    "Customer": {"FirstName": "John", "Street1": "Level 5"}
                }],
                "Errors": ""
            }"#,
        )
        .unwrap();

        let result: QueryTransactionResponse = map(&response);
        assert!(result.errors.is_none());
        assert_eq!(result.transaction_status.as_ref().unwrap().total, 1000);

        let transaction = result.transaction.unwrap();
        let payment = transaction.payment_details.unwrap();
        assert_eq!(payment.invoice_number.as_deref(), Some("Inv 21540"));
        assert_eq!(payment.invoice_reference.as_deref(), Some("513456"));
        assert_eq!(transaction.options, vec!["Option1"]);
        assert_eq!(transaction.max_refund, Some(1000));

        let customer = transaction.customer.unwrap();
        assert_eq!(customer.token_customer_id.as_deref(), Some("917758625852"));
        assert_eq!(
            customer.address.unwrap().street1.as_deref(),
            Some("Level 5")
        );
    }

    #[test]
    fn test_empty_query_result() {
        let response: TransactionSearchResponse =
            serde_json::from_str(r#"{"Transactions":[],"Errors":"V6171"}"#).unwrap();
        let result: QueryTransactionResponse = map(&response);
        assert_eq!(result.errors, Some(vec!["V6171".to_string()]));
        assert!(result.transaction.is_none());
    }

    #[test]
    fn test_refund_response() {
        let response: DirectRefundResponse = serde_json::from_str(
            r#"{
                "AuthorisationCode": "138453",
                "ResponseCode": null,
                "ResponseMessage": "A2000",
                "TransactionID": 11223345,
                "TransactionStatus": true,
                "Refund": {"TransactionID": "11223344", "TotalAmount": 500, "CurrencyCode": "AUD"},
                "Errors": null
            }"#,
        )
        .unwrap();

        let result: RefundResponse = map(&response);
        let refund = result.refund.unwrap();
        assert_eq!(refund.original_transaction_id, 11_223_344);
        assert_eq!(refund.total_amount, 500);

        let status = result.transaction_status.unwrap();
        assert_eq!(status.transaction_id, 11_223_345);
        let details = status.processing_details.unwrap();
        assert!(details.response_code.is_none());
        assert!(details.response_message.unwrap().starts_with('A'));
    }

    #[test]
    fn test_capture_response() {
        let response = DirectCapturePaymentResponse {
            response_code: Some("00".into()),
            response_message: Some("A2000".into()),
            transaction_id: Some(11_223_346),
            transaction_status: Some(true),
            errors: None,
        };
        let result: CapturePaymentResponse = map(&response);
        let status = result.transaction_status.unwrap();
        assert_eq!(status.status, Some(true));
        assert!(status.processing_details.unwrap().authorisation_code.is_none());
    }

    #[test]
    fn test_settlement_response() {
        let response: DirectSettlementSearchResponse = serde_json::from_str(
            r#"{
                "SettlementSummaries": [{
                    "SettlementID": "0f1c9b",
                    "Currency": "036",
                    "CurrencyCode": "AUD",
                    "TotalCredit": 1000,
                    "TotalDebit": 0,
                    "TotalBalance": 1000,
                    "BalancePerCardType": [{"CardType": "VI", "NumberOfTransactions": 1, "Credit": 1000, "Debit": 0, "Balance": 1000}]
                }],
                "SettlementTransactions": null,
                "Errors": null
            }"#,
        )
        .unwrap();

        let result: SettlementSearchResponse = map(&response);
        assert_eq!(result.settlement_summaries.len(), 1);
        assert_eq!(
            result.settlement_summaries[0].balance_per_card_type[0].card_type.as_deref(),
            Some("VI")
        );
        assert!(result.settlement_transactions.is_empty());
    }
}
