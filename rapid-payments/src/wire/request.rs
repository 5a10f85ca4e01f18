//! Request bodies, one per wire operation

use super::{
    DirectTokenCustomer, LineItem, Method, MethodTagged, OptionValue, Payment, RefundDetails,
    ShippingAddress, TokenCustomer,
};
use crate::types::TransactionType;
use serde::Serialize;
use serde_with::skip_serializing_none;

/// `POST Transaction`, `PUT Transaction`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DirectPaymentRequest {
    pub customer: Option<DirectTokenCustomer>,
    pub shipping_address: Option<ShippingAddress>,
    pub items: Option<Vec<LineItem>>,
    pub options: Option<Vec<OptionValue>>,
    pub payment: Payment,
    pub redirect_url: Option<String>,
    #[serde(rename = "CustomerIP")]
    pub customer_ip: Option<String>,
    #[serde(rename = "DeviceID")]
    pub device_id: Option<String>,
    #[serde(rename = "PartnerID")]
    pub partner_id: Option<String>,
    pub transaction_type: TransactionType,
    pub method: Method,
    pub secured_card_data: Option<String>,
}

/// Direct authorisation, sent to `POST Transaction` with `Method: Authorise`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DirectAuthorisationRequest {
    pub customer: Option<DirectTokenCustomer>,
    pub shipping_address: Option<ShippingAddress>,
    pub items: Option<Vec<LineItem>>,
    pub options: Option<Vec<OptionValue>>,
    pub payment: Payment,
    #[serde(rename = "CustomerIP")]
    pub customer_ip: Option<String>,
    #[serde(rename = "DeviceID")]
    pub device_id: Option<String>,
    #[serde(rename = "PartnerID")]
    pub partner_id: Option<String>,
    pub transaction_type: TransactionType,
    pub method: Method,
    pub secured_card_data: Option<String>,
}

/// `POST AccessCodes`, `PUT AccessCodes`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAccessCodeRequest {
    pub customer: Option<TokenCustomer>,
    pub shipping_address: Option<ShippingAddress>,
    pub items: Option<Vec<LineItem>>,
    pub options: Option<Vec<OptionValue>>,
    pub payment: Payment,
    pub redirect_url: Option<String>,
    pub cancel_url: Option<String>,
    pub checkout_payment: Option<bool>,
    pub checkout_url: Option<String>,
    #[serde(rename = "CustomerIP")]
    pub customer_ip: Option<String>,
    #[serde(rename = "DeviceID")]
    pub device_id: Option<String>,
    #[serde(rename = "PartnerID")]
    pub partner_id: Option<String>,
    pub transaction_type: TransactionType,
    pub method: Method,
}

/// `POST AccessCodesShared`, `PUT AccessCodesShared`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAccessCodeSharedRequest {
    #[serde(flatten)]
    pub access_code: CreateAccessCodeRequest,
    pub logo_url: Option<String>,
    pub header_text: Option<String>,
    pub language: Option<String>,
    pub customer_read_only: Option<bool>,
    pub custom_view: Option<String>,
    pub verify_customer_phone: Option<bool>,
    pub verify_customer_email: Option<bool>,
}

/// `POST Transaction/{id}/Refund`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DirectRefundRequest {
    pub refund: RefundDetails,
    pub customer: Option<DirectTokenCustomer>,
    pub shipping_address: Option<ShippingAddress>,
    pub items: Option<Vec<LineItem>>,
    pub options: Option<Vec<OptionValue>>,
    #[serde(rename = "DeviceID")]
    pub device_id: Option<String>,
    #[serde(rename = "PartnerID")]
    pub partner_id: Option<String>,
}

/// `POST CapturePayment`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DirectCapturePaymentRequest {
    pub payment: Payment,
    pub transaction_id: String,
}

/// `POST CancelAuthorisation`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DirectCancelAuthorisationRequest {
    pub transaction_id: String,
}

macro_rules! impl_method_tagged {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl MethodTagged for $ty {
                fn set_method(&mut self, method: Method) {
                    self.method = method;
                }
            }
        )+
    };
}

impl_method_tagged!(
    DirectPaymentRequest,
    DirectAuthorisationRequest,
    CreateAccessCodeRequest
);

impl MethodTagged for CreateAccessCodeSharedRequest {
    fn set_method(&mut self, method: Method) {
        self.access_code.method = method;
    }
}
