//! Rapid gateway facade
//!
//! One method per wire operation. The facade owns endpoint, credential and
//! version configuration, builds the HTTP call, and turns every transport
//! failure into an error code inside the expected response shape.
//!
//! ## Credential state
//!
//! ```text
//!   set_credentials(non-blank) ──► valid ──401/403/404──► invalid
//!            ▲                                              │
//!            └──────────────── set_credentials ◄────────────┘
//! ```
//!
//! Once a call is rejected as unauthenticated the credentials stay invalid
//! until they are set again; nothing else brings them back.

use crate::codes::{
    AUTHENTICATION_ERROR, COMMUNICATION_ERROR, INTERNAL_SDK_ERROR, INVALID_CREDENTIAL_ERROR,
    INVALID_ENDPOINT_ERROR,
};
use crate::config::{Endpoint, RapidConfig, credentials_present, is_well_formed};
use crate::wire::*;
use base64::{Engine, engine::general_purpose::STANDARD};
use parking_lot::RwLock;
use rapid_http_client::{HttpClientError, Method as HttpMethod, Transport, TransportRequest};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, warn};
use url::Url;

/// Client identifier sent as `User-Agent`
pub const USER_AGENT: &str = concat!("eWAY SDK Rust ", env!("CARGO_PKG_VERSION"));
/// Header carrying the pinned API version
pub const API_VERSION_HEADER: &str = "X-EWAY-APIVERSION";

const ACCESS_CODES: &str = "AccessCodes";
const ACCESS_CODES_SHARED: &str = "AccessCodesShared";
const ACCESS_CODE: &str = "AccessCode";
const TRANSACTION: &str = "Transaction";
const REFUND: &str = "Refund";
const CAPTURE_PAYMENT: &str = "CapturePayment";
const CANCEL_AUTHORISATION: &str = "CancelAuthorisation";
const CUSTOMER: &str = "Customer";
const INVOICE_NUMBER: &str = "InvoiceNumber";
const INVOICE_REF: &str = "InvoiceRef";
const SEARCH: &str = "Search";
const SETTLEMENT: &str = "Settlement";

struct GatewayState {
    endpoint: String,
    endpoint_valid: bool,
    authorization: SecretString,
    credentials_valid: bool,
    version: Option<u32>,
}

impl GatewayState {
    fn set_endpoint(&mut self, endpoint: &str) {
        self.endpoint = Endpoint::parse(endpoint).resolve();
        self.endpoint_valid = is_well_formed(&self.endpoint);
    }

    fn set_credentials(&mut self, api_key: &str, password: &str) {
        let token = STANDARD.encode(format!("{}:{}", api_key, password));
        self.authorization = SecretString::from(format!("Basic {}", token));
        self.credentials_valid = credentials_present(api_key, password);
    }
}

/// Configured access to the Rapid API.
pub struct RapidGateway {
    transport: Arc<dyn Transport>,
    state: RwLock<GatewayState>,
}

impl RapidGateway {
    /// Create a gateway over `transport`.
    pub fn new(config: &RapidConfig, transport: Arc<dyn Transport>) -> Self {
        let mut state = GatewayState {
            endpoint: String::new(),
            endpoint_valid: false,
            authorization: SecretString::from(String::new()),
            credentials_valid: false,
            version: config.api_version,
        };
        state.set_endpoint(&config.endpoint);
        state.set_credentials(&config.api_key, config.password.expose_secret());

        Self {
            transport,
            state: RwLock::new(state),
        }
    }

    /// Replace the API key and password. This is the only way back from a
    /// rejected-credentials state.
    pub fn set_credentials(&self, api_key: &str, password: &str) {
        self.state.write().set_credentials(api_key, password);
    }

    /// Switch to `Production`, `Sandbox` or another base URL.
    pub fn set_endpoint(&self, endpoint: &str) {
        self.state.write().set_endpoint(endpoint);
    }

    /// Pin the gateway API version.
    pub fn set_version(&self, version: u32) {
        self.state.write().version = Some(version);
    }

    /// Resolved base URL.
    pub fn endpoint(&self) -> String {
        self.state.read().endpoint.clone()
    }

    pub fn version(&self) -> Option<u32> {
        self.state.read().version
    }

    /// Endpoint well formed and credentials usable.
    pub fn is_valid(&self) -> bool {
        let state = self.state.read();
        state.endpoint_valid && state.credentials_valid
    }

    /// Codes for whatever currently makes the configuration invalid.
    pub fn error_codes(&self) -> Vec<String> {
        let state = self.state.read();
        let mut codes = Vec::new();
        if !state.endpoint_valid {
            codes.push(INVALID_ENDPOINT_ERROR.to_string());
        }
        if !state.credentials_valid {
            codes.push(INVALID_CREDENTIAL_ERROR.to_string());
        }
        codes
    }

    /// `POST AccessCodes`
    pub async fn create_access_code(
        &self,
        request: &CreateAccessCodeRequest,
    ) -> CreateAccessCodeResponse {
        self.send_json(HttpMethod::POST, &[ACCESS_CODES], request).await
    }

    /// `PUT AccessCodes`, always as `UpdateTokenCustomer`
    pub async fn update_customer_access_code(
        &self,
        request: CreateAccessCodeRequest,
    ) -> CreateAccessCodeResponse {
        let request = for_update(request);
        self.send_json(HttpMethod::PUT, &[ACCESS_CODES], &request).await
    }

    /// `POST AccessCodesShared`
    pub async fn create_access_code_shared(
        &self,
        request: &CreateAccessCodeSharedRequest,
    ) -> CreateAccessCodeSharedResponse {
        self.send_json(HttpMethod::POST, &[ACCESS_CODES_SHARED], request)
            .await
    }

    /// `PUT AccessCodesShared`, always as `UpdateTokenCustomer`
    pub async fn update_customer_access_code_shared(
        &self,
        request: CreateAccessCodeSharedRequest,
    ) -> CreateAccessCodeSharedResponse {
        let request = for_update(request);
        self.send_json(HttpMethod::PUT, &[ACCESS_CODES_SHARED], &request)
            .await
    }

    /// `GET AccessCode/{access_code}`
    pub async fn access_code_result(&self, access_code: &str) -> GetAccessCodeResultResponse {
        self.get(&[ACCESS_CODE, access_code], None).await
    }

    /// `POST Transaction`
    pub async fn direct_payment(&self, request: &DirectPaymentRequest) -> DirectPaymentResponse {
        self.send_json(HttpMethod::POST, &[TRANSACTION], request).await
    }

    /// `PUT Transaction`, always as `UpdateTokenCustomer`
    pub async fn update_customer_direct_payment(
        &self,
        request: DirectPaymentRequest,
    ) -> DirectPaymentResponse {
        let request = for_update(request);
        self.send_json(HttpMethod::PUT, &[TRANSACTION], &request).await
    }

    /// `POST Transaction` with `Method: Authorise`
    pub async fn direct_authorisation(
        &self,
        request: &DirectAuthorisationRequest,
    ) -> DirectAuthorisationResponse {
        self.send_json(HttpMethod::POST, &[TRANSACTION], request).await
    }

    /// `POST CapturePayment`
    pub async fn capture_payment(
        &self,
        request: &DirectCapturePaymentRequest,
    ) -> DirectCapturePaymentResponse {
        self.send_json(HttpMethod::POST, &[CAPTURE_PAYMENT], request)
            .await
    }

    /// `POST CancelAuthorisation`
    pub async fn cancel_authorisation(
        &self,
        request: &DirectCancelAuthorisationRequest,
    ) -> DirectCancelAuthorisationResponse {
        self.send_json(HttpMethod::POST, &[CANCEL_AUTHORISATION], request)
            .await
    }

    /// `POST Transaction/{id}/Refund`
    pub async fn direct_refund(&self, request: &DirectRefundRequest) -> DirectRefundResponse {
        let transaction_id = request.refund.transaction_id.as_deref().unwrap_or_default();
        self.send_json(HttpMethod::POST, &[TRANSACTION, transaction_id, REFUND], request)
            .await
    }

    /// `GET Customer/{token_customer_id}`
    pub async fn direct_customer_search(
        &self,
        token_customer_id: &str,
    ) -> DirectCustomerSearchResponse {
        self.get(&[CUSTOMER, token_customer_id], None).await
    }

    /// `GET Transaction/{id}`; also accepts an access code
    pub async fn query_transaction(&self, transaction_id: &str) -> TransactionSearchResponse {
        self.get(&[TRANSACTION, transaction_id], None).await
    }

    /// `GET Transaction/InvoiceNumber/{invoice_number}`
    pub async fn query_invoice_number(&self, invoice_number: &str) -> TransactionSearchResponse {
        self.get(&[TRANSACTION, INVOICE_NUMBER, invoice_number], None)
            .await
    }

    /// `GET Transaction/InvoiceRef/{invoice_reference}`
    pub async fn query_invoice_ref(&self, invoice_reference: &str) -> TransactionSearchResponse {
        self.get(&[TRANSACTION, INVOICE_REF, invoice_reference], None)
            .await
    }

    /// `GET Search/Settlement?{query}`
    pub async fn settlement_search(&self, query: &str) -> DirectSettlementSearchResponse {
        self.get(&[SEARCH, SETTLEMENT], Some(query)).await
    }

    async fn get<R: WireResponse>(&self, path: &[&str], query: Option<&str>) -> R {
        self.execute(HttpMethod::GET, path, query, None).await
    }

    async fn send_json<Q: Serialize, R: WireResponse>(
        &self,
        method: HttpMethod,
        path: &[&str],
        request: &Q,
    ) -> R {
        match serde_json::to_string(request) {
            Ok(body) => self.execute(method, path, None, Some(body)).await,
            Err(e) => {
                error!(error = %e, path = %path.join("/"), "Failed to serialize Rapid request");
                R::from_error(INTERNAL_SDK_ERROR)
            }
        }
    }

    async fn execute<R: WireResponse>(
        &self,
        method: HttpMethod,
        path: &[&str],
        query: Option<&str>,
        body: Option<String>,
    ) -> R {
        let mut request = {
            let state = self.state.read();
            let Some(url) = join_url(&state.endpoint, path, query) else {
                return R::from_error(INVALID_ENDPOINT_ERROR);
            };

            let mut request = TransportRequest::new(method, url)
                .header("Authorization", state.authorization.expose_secret())
                .header("User-Agent", USER_AGENT)
                .header("Content-Type", "application/json");
            if let Some(version) = state.version {
                request = request.header(API_VERSION_HEADER, version.to_string());
            }
            request
        };
        if let Some(body) = body {
            request = request.body(body);
        }

        debug!(method = %request.method, path = %path.join("/"), "Calling Rapid gateway");

        match self.transport.send(request).await {
            Ok(body) if body.trim().is_empty() => {
                warn!(path = %path.join("/"), "Rapid gateway returned an empty body");
                R::from_error(COMMUNICATION_ERROR)
            }
            Ok(body) => serde_json::from_str(&body).unwrap_or_else(|e| {
                warn!(error = %e, path = %path.join("/"), "Failed to decode Rapid response");
                R::from_error(COMMUNICATION_ERROR)
            }),
            Err(e) => R::from_error(self.failure_code(&e)),
        }
    }

    fn failure_code(&self, failure: &HttpClientError) -> &'static str {
        match failure.status_code() {
            Some(status @ (401 | 403 | 404)) => {
                warn!(status, "Rapid gateway rejected the credentials; marking them invalid");
                self.state.write().credentials_valid = false;
                AUTHENTICATION_ERROR
            }
            Some(status) => {
                debug!(status, "Rapid gateway answered with an error status");
                COMMUNICATION_ERROR
            }
            None => {
                debug!(
                    error = %failure,
                    timeout = failure.is_timeout(),
                    connection = failure.is_connection(),
                    "Rapid gateway could not be reached"
                );
                COMMUNICATION_ERROR
            }
        }
    }
}

fn for_update<R: MethodTagged>(mut request: R) -> R {
    request.set_method(Method::UpdateTokenCustomer);
    request
}

/// Append percent-encoded path segments, and an optional query, to a base URL.
fn join_url(endpoint: &str, path: &[&str], query: Option<&str>) -> Option<String> {
    let mut url = Url::parse(endpoint).ok()?;
    url.path_segments_mut().ok()?.pop_if_empty().extend(path);
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.set_query(Some(query));
    }
    Some(url.into())
}
