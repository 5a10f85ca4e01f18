//! Integration tests for common Rapid workflows.
//!
//! These run the client over the real HTTP transport against a local mock
//! gateway, so headers, paths, bodies and status handling are all exercised
//! end to end.

use rapid::codes::{
    AUTHENTICATION_ERROR, COMMUNICATION_ERROR, INVALID_CREDENTIAL_ERROR, INVALID_ENDPOINT_ERROR,
};
use rapid::prelude::*;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{
    any, body_partial_json, header, header_exists, method, path, query_param,
    query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn client_for(server: &MockServer) -> RapidClient {
    init_tracing();
    RapidClient::new(&RapidConfig::new("key", "password", server.uri())).unwrap()
}

fn visa_customer() -> Customer {
    Customer {
        reference: Some("A12345".into()),
        first_name: Some("John".into()),
        last_name: Some("Smith".into()),
        address: Some(Address {
            street1: Some("Level 5".into()),
            street2: Some("369 Queen Street".into()),
            city: Some("Sydney".into()),
            state: Some("NSW".into()),
            postal_code: Some("2000".into()),
            country: Some("au".into()),
        }),
        card_details: Some(CardDetails::new(
            "John Smith",
            "4444333322221111",
            "12",
            "25",
            "123",
        )),
        ..Default::default()
    }
}

// =============================================================================
// Transaction Tests
// =============================================================================

#[tokio::test]
async fn test_direct_payment_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Transaction"))
        // base64("key:password")
        .and(header("Authorization", "Basic a2V5OnBhc3N3b3Jk"))
        .and(header("Content-Type", "application/json"))
        .and(header_exists("User-Agent"))
        .and(body_partial_json(json!({
            "Method": "ProcessPayment",
            "TransactionType": "Purchase",
            "Payment": { "TotalAmount": 1000 },
            "Customer": {
                "Street1": "Level 5",
                "City": "Sydney",
                "CardDetails": { "Number": "4444333322221111", "CVN": "123" }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "AuthorisationCode": "779917",
            "ResponseCode": "00",
            "ResponseMessage": "A2000",
            "TransactionID": 11223344,
            "TransactionStatus": true,
            "TransactionType": "Purchase",
            "BeagleScore": 0,
            "Verification": { "CVN": 0, "Address": 0, "Email": 0, "Mobile": 0, "Phone": 0 },
            "Customer": {
                "TokenCustomerID": null,
                "Reference": "A12345",
                "FirstName": "John",
                "LastName": "Smith",
                "Street1": "Level 5",
                "Street2": "369 Queen Street",
                "City": "Sydney",
                "State": "NSW",
                "PostalCode": "2000",
                "Country": "au",
                "CardDetails": { "Number": "444433XXXXXX1111", "Name": "John Smith", "ExpiryMonth": "12", "ExpiryYear": "25" }
            },
            "Payment": { "TotalAmount": 1000, "CurrencyCode": "AUD" },
            "Errors": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let transaction = Transaction::new(visa_customer(), 1000);
    let response = client_for(&server)
        .create_transaction(PaymentMethod::Direct, &transaction)
        .await;

    assert!(response.is_success());
    let status = response.transaction_status.unwrap();
    assert_eq!(status.transaction_id, 11223344);
    assert_eq!(status.status, Some(true));

    let customer = response.transaction.unwrap().customer.unwrap();
    assert_eq!(customer.address, visa_customer().address);
}

#[tokio::test]
async fn test_negative_amount_returns_gateway_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Transaction"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "TransactionStatus": false,
            "TransactionID": null,
            "Errors": "V6011"
        })))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .create_transaction(PaymentMethod::Direct, &Transaction::new(visa_customer(), -100))
        .await;

    assert_eq!(response.errors().unwrap()[0], "V6011");
    assert!(response.transaction_status.is_none());
    assert_eq!(
        user_display_message("V6011", "en"),
        "Invalid Payment TotalAmount"
    );
}

#[tokio::test]
async fn test_transparent_redirect_with_path_prefix_and_version() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rapid/AccessCodes"))
        .and(header("X-EWAY-APIVERSION", "40"))
        .and(body_partial_json(json!({
            "Method": "TokenPayment",
            "RedirectUrl": "http://www.eway.com.au",
            "Customer": { "TokenCustomerID": 917758625852i64 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "AccessCode": "F9802j0",
            "FormActionURL": "https://secure-au.sandbox.ewaypayments.com/AccessCode/F9802j0",
            "Customer": { "TokenCustomerID": 917758625852i64, "CardNumber": "444433XXXXXX1111" },
            "Payment": { "TotalAmount": 1000 },
            "Errors": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = RapidConfig::new("key", "password", format!("{}/rapid", server.uri())).with_version(40);
    let client = RapidClient::new(&config).unwrap();
    assert!(client.gateway().endpoint().ends_with("/rapid/"));

    let transaction = Transaction {
        redirect_url: Some("http://www.eway.com.au".into()),
        ..Transaction::new(
            Customer {
                token_customer_id: Some("917758625852".into()),
                ..Default::default()
            },
            1000,
        )
    };
    let response = client
        .create_transaction(PaymentMethod::TransparentRedirect, &transaction)
        .await;

    assert!(response.is_success());
    assert_eq!(response.access_code.as_deref(), Some("F9802j0"));
    assert!(response.form_action_url.is_some());
}

// =============================================================================
// Gateway Failure Tests
// =============================================================================

#[tokio::test]
async fn test_rejected_credentials_stay_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Transaction/11223344"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let first = client.query_transaction_by_id(11223344).await;
    assert_eq!(first.errors().unwrap(), [AUTHENTICATION_ERROR]);

    let second = client.query_transaction_by_id(11223344).await;
    assert_eq!(second.errors().unwrap(), [INVALID_CREDENTIAL_ERROR]);
    assert!(!client.is_valid());
}

#[tokio::test]
async fn test_server_error_and_empty_body_are_communication_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Customer/917758625852"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/AccessCode/F9802j0"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let customer = client.query_customer(917758625852).await;
    assert_eq!(customer.errors().unwrap(), [COMMUNICATION_ERROR]);

    let result = client.access_code_result("F9802j0").await;
    assert_eq!(result.errors().unwrap(), [COMMUNICATION_ERROR]);

    assert!(client.is_valid());
}

#[tokio::test]
async fn test_unconfigured_client_never_calls_out() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = RapidClient::new(&RapidConfig::new(" ", "", server.uri())).unwrap();

    let response = client
        .create_transaction(PaymentMethod::Direct, &Transaction::new(visa_customer(), 1000))
        .await;
    assert_eq!(response.errors().unwrap(), [INVALID_CREDENTIAL_ERROR]);

    client.set_endpoint("::not a url::");
    let response = client
        .settlement_search(&SettlementSearchRequest::default())
        .await;
    assert_eq!(
        response.errors().unwrap(),
        [INVALID_ENDPOINT_ERROR, INVALID_CREDENTIAL_ERROR]
    );
}

// =============================================================================
// Settlement Search Tests
// =============================================================================

#[tokio::test]
async fn test_settlement_search_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Search/Settlement"))
        .and(query_param("ReportMode", "Both"))
        .and(query_param("SettlementDate", "2016-02-01"))
        .and(query_param_is_missing("Page"))
        .and(query_param_is_missing("PageSize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "SettlementSummaries": [{
                "SettlementID": "0f0b8d2a",
                "CurrencyCode": "AUD",
                "TotalCredit": 1000,
                "TotalDebit": 200,
                "TotalBalance": 800,
                "BalancePerCardType": [
                    { "CardType": "VI", "NumberOfTransactions": 2, "Credit": 1000, "Debit": 200, "Balance": 800 }
                ]
            }],
            "SettlementTransactions": [{
                "SettlementID": "0f0b8d2a",
                "eWAYTransactionID": 11223344,
                "CardType": "VI",
                "CurrencyCode": "AUD",
                "Amount": 1000
            }],
            "Errors": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = SettlementSearchRequest {
        settlement_date: chrono::NaiveDate::from_ymd_opt(2016, 2, 1),
        ..Default::default()
    };
    let response = client_for(&server).settlement_search(&request).await;

    assert!(response.is_success());
    assert_eq!(response.settlement_summaries[0].balance_per_card_type.len(), 1);
    assert_eq!(response.settlement_transactions[0].transaction_id, 11223344);
}

// =============================================================================
// Injected Transport Tests
// =============================================================================

#[tokio::test]
async fn test_client_over_injected_transport() {
    use rapid_payments::testing::MockTransport;

    let transport = MockTransport::new().reply_json(json!({
        "Customers": [{ "TokenCustomerID": "917758625852", "FirstName": "John" }],
        "Errors": null
    }));
    let client = RapidClient::with_transport(
        &RapidConfig::new("key", "password", "Production"),
        Arc::new(transport.clone()),
    );

    let response = client.query_customer(917758625852).await;

    assert_eq!(
        response.customers[0].first_name.as_deref(),
        Some("John")
    );
    assert_eq!(
        transport.last_call().unwrap().url,
        "https://api.ewaypayments.com/Customer/917758625852"
    );
}
