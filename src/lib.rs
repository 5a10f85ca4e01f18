// Rapid SDK - an async client for the eWAY Rapid payment gateway
//
// This library bundles the gateway client with the HTTP transport it runs on.

// Re-export the client
pub use rapid_payments::*;

// Re-export the transport crate
pub use rapid_http_client as http;

// Prelude for common imports
pub mod prelude {
    pub use crate::http::{HttpClient, HttpClientConfig, Transport, TransportRequest};
    pub use crate::{
        Address,
        BaseResponse,
        CancelAuthorisationRequest,
        CapturePaymentRequest,
        CardDetails,
        Customer,
        Endpoint,
        LineItem,
        PaymentDetails,
        PaymentMethod,
        RapidClient,
        RapidConfig,
        RapidError,
        RapidResult,
        Refund,
        SettlementSearchRequest,
        ShippingAddress,
        Transaction,
        TransactionFilter,
        TransactionType,
        user_display_message,
    };
}
