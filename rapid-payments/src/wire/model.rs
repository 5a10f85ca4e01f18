//! Wire objects shared by several operations

use super::{lenient_id, lenient_string, nullable};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Customer identity and flat address, common to both wire customer shapes.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomerFields {
    pub reference: Option<String>,
    pub title: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    pub job_description: Option<String>,
    pub street1: Option<String>,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub comments: Option<String>,
    pub fax: Option<String>,
    pub url: Option<String>,
}

/// Customer used by Direct operations, with card data nested.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DirectTokenCustomer {
    #[serde(rename = "TokenCustomerID", deserialize_with = "lenient_string")]
    pub token_customer_id: Option<String>,
    #[serde(flatten)]
    pub fields: CustomerFields,
    pub card_details: Option<CardDetails>,
}

/// Customer used by access code operations, with card data flattened.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TokenCustomer {
    #[serde(rename = "TokenCustomerID", deserialize_with = "lenient_id")]
    pub token_customer_id: Option<i64>,
    #[serde(flatten)]
    pub fields: CustomerFields,
    pub card_name: Option<String>,
    pub card_number: Option<String>,
    pub card_expiry_month: Option<String>,
    pub card_expiry_year: Option<String>,
    pub card_start_month: Option<String>,
    pub card_start_year: Option<String>,
    pub card_issue_number: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CardDetails {
    pub name: Option<String>,
    pub number: Option<String>,
    pub expiry_month: Option<String>,
    pub expiry_year: Option<String>,
    pub start_month: Option<String>,
    pub start_year: Option<String>,
    pub issue_number: Option<String>,
    #[serde(rename = "CVN")]
    pub cvn: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Payment {
    pub total_amount: i32,
    pub invoice_number: Option<String>,
    pub invoice_description: Option<String>,
    pub invoice_reference: Option<String>,
    pub currency_code: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ShippingAddress {
    pub shipping_method: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub street1: Option<String>,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LineItem {
    #[serde(rename = "SKU")]
    pub sku: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i32>,
    pub unit_cost: Option<i32>,
    pub tax: Option<i32>,
    pub total: Option<i32>,
}

/// Merchant defined value echoed back on queries
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OptionValue {
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Verification {
    #[serde(rename = "CVN")]
    pub cvn: i32,
    pub address: i32,
    pub email: i32,
    pub mobile: i32,
    pub phone: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BeagleVerification {
    pub email: i32,
    pub phone: i32,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RefundDetails {
    #[serde(rename = "TransactionID", deserialize_with = "lenient_string")]
    pub transaction_id: Option<String>,
    pub total_amount: i32,
    pub invoice_number: Option<String>,
    pub invoice_description: Option<String>,
    pub invoice_reference: Option<String>,
    pub currency_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BalanceSummaryPerCardType {
    pub card_type: Option<String>,
    pub number_of_transactions: i32,
    pub credit: i64,
    pub debit: i64,
    pub balance: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SettlementSummary {
    #[serde(rename = "SettlementID")]
    pub settlement_id: Option<String>,
    pub currency: Option<String>,
    pub currency_code: Option<String>,
    pub total_credit: i64,
    pub total_debit: i64,
    pub total_balance: i64,
    #[serde(deserialize_with = "nullable")]
    pub balance_per_card_type: Vec<BalanceSummaryPerCardType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SettlementTransaction {
    #[serde(rename = "SettlementID")]
    pub settlement_id: Option<String>,
    #[serde(rename = "eWAYTransactionID")]
    pub eway_transaction_id: i64,
    pub transaction_type: Option<String>,
    pub card_type: Option<String>,
    pub currency: Option<String>,
    pub currency_code: Option<String>,
    pub amount: i64,
    pub transaction_date_time: Option<String>,
    pub settlement_date_time: Option<String>,
}
