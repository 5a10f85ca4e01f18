//! Rapid client
//!
//! One entry point per logical intent. Each entry point checks the gateway
//! configuration first, picks the wire operation, maps the request, and
//! maps the wire response back into the unified result shape.
//!
//! Expected failures never come back as `Err`. Check `errors` on every
//! result before trusting any other field.

use crate::codes::INTERNAL_SDK_ERROR;
use crate::config::RapidConfig;
use crate::dispatch::{CustomerRoute, TransactionLookup, TransactionRoute};
use crate::error::RapidResult;
use crate::gateway::RapidGateway;
use crate::mapping::map;
use crate::response::*;
use crate::search::settlement_query;
use crate::types::*;
use crate::wire::{
    CreateAccessCodeRequest, CreateAccessCodeSharedRequest, DirectAuthorisationRequest,
    DirectCancelAuthorisationRequest, DirectCapturePaymentRequest, DirectPaymentRequest,
    DirectRefundRequest, MethodTagged,
};
use rapid_http_client::{HttpClient, HttpClientConfig, Transport};
use std::sync::Arc;
use tracing::debug;

/// eWAY Rapid client
///
/// Cheap to clone; clones share one gateway configuration.
#[derive(Clone)]
pub struct RapidClient {
    gateway: Arc<RapidGateway>,
}

impl RapidClient {
    /// Create a client over the default HTTP transport.
    pub fn new(config: &RapidConfig) -> RapidResult<Self> {
        let transport = HttpClient::new(HttpClientConfig::default())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over a caller supplied transport.
    pub fn with_transport(config: &RapidConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            gateway: Arc::new(RapidGateway::new(config, transport)),
        }
    }

    /// Create a client from `RAPID_*` environment variables.
    pub fn from_env() -> RapidResult<Self> {
        Self::new(&RapidConfig::from_env()?)
    }

    /// The underlying gateway facade
    pub fn gateway(&self) -> &RapidGateway {
        &self.gateway
    }

    pub fn set_credentials(&self, api_key: &str, password: &str) {
        self.gateway.set_credentials(api_key, password);
    }

    pub fn set_endpoint(&self, endpoint: &str) {
        self.gateway.set_endpoint(endpoint);
    }

    pub fn set_version(&self, version: u32) {
        self.gateway.set_version(version);
    }

    pub fn is_valid(&self) -> bool {
        self.gateway.is_valid()
    }

    /// Configuration error codes, empty when the client is usable.
    pub fn error_codes(&self) -> Vec<String> {
        self.gateway.error_codes()
    }

    /// Create a transaction.
    ///
    /// The wire operation depends on `payment_method`, on `capture`, and on
    /// whether the customer carries a token or is to be saved.
    pub async fn create_transaction(
        &self,
        payment_method: PaymentMethod,
        transaction: &Transaction,
    ) -> CreateTransactionResponse {
        if let Some(rejected) = self.preflight("create_transaction") {
            return rejected;
        }

        let route = TransactionRoute::resolve(payment_method, transaction);
        debug!(?payment_method, %route, method = ?route.method(), "Dispatching transaction");

        match route {
            TransactionRoute::DirectPayment(method) => {
                let mut request: DirectPaymentRequest = map(transaction);
                request.set_method(method);
                map(&self.gateway.direct_payment(&request).await)
            }
            TransactionRoute::AccessCode(method) => {
                let mut request: CreateAccessCodeRequest = map(transaction);
                request.set_method(method);
                map(&self.gateway.create_access_code(&request).await)
            }
            TransactionRoute::AccessCodeShared(method) => {
                let mut request: CreateAccessCodeSharedRequest = map(transaction);
                request.set_method(method);
                map(&self.gateway.create_access_code_shared(&request).await)
            }
            TransactionRoute::DirectAuthorisation => {
                let request: DirectAuthorisationRequest = map(transaction);
                map(&self.gateway.direct_authorisation(&request).await)
            }
        }
    }

    /// Create a token customer.
    ///
    /// Fails with [`RapidError::UnsupportedOperation`](crate::RapidError::UnsupportedOperation)
    /// for payment methods that cannot manage customers.
    pub async fn create_customer(
        &self,
        payment_method: PaymentMethod,
        customer: &Customer,
    ) -> RapidResult<CreateCustomerResponse> {
        if let Some(rejected) = self.preflight("create_customer") {
            return Ok(rejected);
        }

        let route = CustomerRoute::resolve(payment_method)?;
        debug!(?payment_method, ?route, "Creating token customer");

        Ok(match route {
            CustomerRoute::DirectPayment => {
                let request: DirectPaymentRequest = map(customer);
                map(&self.gateway.direct_payment(&request).await)
            }
            CustomerRoute::AccessCode => {
                let request: CreateAccessCodeRequest = map(customer);
                map(&self.gateway.create_access_code(&request).await)
            }
            CustomerRoute::AccessCodeShared => {
                let request: CreateAccessCodeSharedRequest = map(customer);
                map(&self.gateway.create_access_code_shared(&request).await)
            }
        })
    }

    /// Update a token customer. The customer must carry its token id.
    pub async fn update_customer(
        &self,
        payment_method: PaymentMethod,
        customer: &Customer,
    ) -> RapidResult<CreateCustomerResponse> {
        if let Some(rejected) = self.preflight("update_customer") {
            return Ok(rejected);
        }

        let route = CustomerRoute::resolve(payment_method)?;
        debug!(?payment_method, ?route, "Updating token customer");

        // Access code requests carry the token id as a number.
        if route != CustomerRoute::DirectPayment
            && customer
                .token()
                .is_some_and(|id| id.trim().parse::<i64>().is_err())
        {
            debug!(token_customer_id = ?customer.token_customer_id, "Rejecting non-numeric token id");
            return Ok(internal_error());
        }

        Ok(match route {
            CustomerRoute::DirectPayment => {
                let request: DirectPaymentRequest = map(customer);
                map(&self.gateway.update_customer_direct_payment(request).await)
            }
            CustomerRoute::AccessCode => {
                let request: CreateAccessCodeRequest = map(customer);
                map(&self.gateway.update_customer_access_code(request).await)
            }
            CustomerRoute::AccessCodeShared => {
                let request: CreateAccessCodeSharedRequest = map(customer);
                map(&self.gateway.update_customer_access_code_shared(request).await)
            }
        })
    }

    /// Look up a transaction by whichever single dimension `filter` sets.
    ///
    /// An invalid filter yields `S9995` without a network call.
    pub async fn query_transaction(&self, filter: &TransactionFilter) -> QueryTransactionResponse {
        if let Some(rejected) = self.preflight("query_transaction") {
            return rejected;
        }

        let Some(lookup) = filter.lookup().filter(|_| filter.is_valid()) else {
            debug!(?filter, "Rejecting invalid transaction filter");
            return internal_error();
        };

        match lookup {
            TransactionLookup::TransactionId(id) => {
                map(&self.gateway.query_transaction(&id.to_string()).await)
            }
            TransactionLookup::AccessCode(access_code) => {
                map(&self.gateway.query_transaction(access_code).await)
            }
            TransactionLookup::InvoiceReference(reference) => {
                map(&self.gateway.query_invoice_ref(reference).await)
            }
            TransactionLookup::InvoiceNumber(number) => {
                map(&self.gateway.query_invoice_number(number).await)
            }
        }
    }

    pub async fn query_transaction_by_id(&self, transaction_id: i64) -> QueryTransactionResponse {
        self.query_transaction(&TransactionFilter::by_transaction_id(transaction_id))
            .await
    }

    pub async fn query_access_code(&self, access_code: &str) -> QueryTransactionResponse {
        self.query_transaction(&TransactionFilter::by_access_code(access_code))
            .await
    }

    pub async fn query_invoice_number(&self, invoice_number: &str) -> QueryTransactionResponse {
        self.query_transaction(&TransactionFilter::by_invoice_number(invoice_number))
            .await
    }

    pub async fn query_invoice_ref(&self, invoice_reference: &str) -> QueryTransactionResponse {
        self.query_transaction(&TransactionFilter::by_invoice_reference(invoice_reference))
            .await
    }

    /// Outcome of a Transparent Redirect or Responsive Shared page.
    pub async fn access_code_result(&self, access_code: &str) -> QueryTransactionResponse {
        if let Some(rejected) = self.preflight("access_code_result") {
            return rejected;
        }
        if access_code.trim().is_empty() {
            return internal_error();
        }

        map(&self.gateway.access_code_result(access_code).await)
    }

    /// Fetch a token customer.
    pub async fn query_customer(&self, token_customer_id: i64) -> QueryCustomerResponse {
        if let Some(rejected) = self.preflight("query_customer") {
            return rejected;
        }
        if token_customer_id <= 0 {
            return internal_error();
        }

        let response = self
            .gateway
            .direct_customer_search(&token_customer_id.to_string())
            .await;
        map(&response)
    }

    /// Refund all or part of a captured transaction.
    pub async fn refund(&self, refund: &Refund) -> RefundResponse {
        if let Some(rejected) = self.preflight("refund") {
            return rejected;
        }

        let request: DirectRefundRequest = map(refund);
        map(&self.gateway.direct_refund(&request).await)
    }

    /// Capture an earlier authorisation.
    pub async fn capture_payment(&self, request: &CapturePaymentRequest) -> CapturePaymentResponse {
        if let Some(rejected) = self.preflight("capture_payment") {
            return rejected;
        }

        let request: DirectCapturePaymentRequest = map(request);
        map(&self.gateway.capture_payment(&request).await)
    }

    /// Release an earlier authorisation.
    pub async fn cancel_authorisation(
        &self,
        request: &CancelAuthorisationRequest,
    ) -> CancelAuthorisationResponse {
        if let Some(rejected) = self.preflight("cancel_authorisation") {
            return rejected;
        }

        let request: DirectCancelAuthorisationRequest = map(request);
        map(&self.gateway.cancel_authorisation(&request).await)
    }

    /// Search settlement reports.
    pub async fn settlement_search(
        &self,
        request: &SettlementSearchRequest,
    ) -> SettlementSearchResponse {
        if let Some(rejected) = self.preflight("settlement_search") {
            return rejected;
        }

        map(&self.gateway.settlement_search(&settlement_query(request)).await)
    }

    /// A result carrying the configuration error codes, or `None` when the
    /// gateway is usable.
    fn preflight<R: BaseResponse>(&self, operation: &str) -> Option<R> {
        let codes = self.gateway.error_codes();
        if codes.is_empty() {
            return None;
        }

        debug!(operation, errors = %codes.join(","), "Rapid client not configured, skipping call");
        Some(R::with_errors(codes))
    }
}

fn internal_error<R: BaseResponse>() -> R {
    R::with_errors(vec![INTERNAL_SDK_ERROR.to_string()])
}
