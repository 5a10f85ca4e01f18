//! Domain types
//!
//! These are the shapes callers build and read. They are independent of the
//! gateway's wire format, which lives in [`crate::wire`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a transaction or customer is submitted to the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Card data posted straight to the gateway
    Direct,
    /// Merchant-hosted form posting to a gateway URL via an access code
    TransparentRedirect,
    /// Gateway-hosted payment page
    ResponsiveShared,
    /// Authorise only, captured or cancelled later
    Authorisation,
    /// Encrypted card data from a wallet provider
    Wallet,
}

/// Transaction type reported to the gateway
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    /// Card-holder present e-commerce purchase
    #[default]
    Purchase,
    /// Merchant initiated repeat payment
    Recurring,
    /// Mail or telephone order
    #[serde(rename = "MOTO")]
    Moto,
}

/// Street address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street1: Option<String>,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    /// Two letter ISO country code, lower case
    pub country: Option<String>,
    pub postal_code: Option<String>,
}

impl Address {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.street1.is_none()
            && self.street2.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.country.is_none()
            && self.postal_code.is_none()
    }
}

/// Card details. The gateway only ever returns a masked number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    pub name: Option<String>,
    pub number: Option<String>,
    pub expiry_month: Option<String>,
    pub expiry_year: Option<String>,
    pub start_month: Option<String>,
    pub start_year: Option<String>,
    pub issue_number: Option<String>,
    pub cvn: Option<String>,
}

impl CardDetails {
    /// Card details with number, expiry and CVN.
    pub fn new(
        name: impl Into<String>,
        number: impl Into<String>,
        expiry_month: impl Into<String>,
        expiry_year: impl Into<String>,
        cvn: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            number: Some(number.into()),
            expiry_month: Some(expiry_month.into()),
            expiry_year: Some(expiry_year.into()),
            cvn: Some(cvn.into()),
            ..Default::default()
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A card holder, optionally stored on the gateway as a token customer.
///
/// A customer with `token_customer_id` set is an update target; without one
/// it is a creation target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Gateway token identifier
    pub token_customer_id: Option<String>,
    pub reference: Option<String>,
    pub title: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    pub job_description: Option<String>,
    pub address: Option<Address>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub fax: Option<String>,
    pub url: Option<String>,
    pub comments: Option<String>,
    pub card_details: Option<CardDetails>,
    /// IP address of the customer's device
    pub customer_device_ip: Option<String>,

    // Access code and shared page flows
    pub redirect_url: Option<String>,
    pub cancel_url: Option<String>,
    pub logo_url: Option<String>,
    pub header_text: Option<String>,
    pub language: Option<String>,
    pub customer_read_only: Option<bool>,
    pub custom_view: Option<String>,
    pub verify_customer_phone: Option<bool>,
    pub verify_customer_email: Option<bool>,
}

impl Customer {
    /// Token customer id, if this customer refers to a stored one.
    pub fn token(&self) -> Option<&str> {
        self.token_customer_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }
}

/// Shipping destination
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    /// Gateway shipping method name, e.g. `NextDay`
    pub shipping_method: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<Address>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
}

/// Invoice line. Amounts are in cents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i32>,
    pub unit_cost: Option<i32>,
    pub tax: Option<i32>,
    pub total: Option<i32>,
}

/// Amount and invoice metadata. `total_amount` is in cents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub total_amount: i32,
    pub invoice_number: Option<String>,
    pub invoice_description: Option<String>,
    pub invoice_reference: Option<String>,
    /// ISO 4217 code, e.g. `AUD`
    pub currency_code: Option<String>,
}

impl PaymentDetails {
    /// Payment of `total_amount` cents.
    pub fn new(total_amount: i32) -> Self {
        Self {
            total_amount,
            ..Default::default()
        }
    }
}

/// A payment intent.
///
/// `capture` defaults to `true`; set it to `false` to only authorise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub customer: Option<Customer>,
    pub shipping_details: Option<ShippingAddress>,
    pub payment_details: Option<PaymentDetails>,
    pub line_items: Vec<LineItem>,
    pub options: Vec<String>,
    pub device_id: Option<String>,
    pub partner_id: Option<String>,
    pub transaction_type: TransactionType,
    pub capture: bool,
    pub save_customer: bool,
    pub redirect_url: Option<String>,
    pub cancel_url: Option<String>,
    pub checkout_url: Option<String>,
    pub checkout_payment: Option<bool>,
    pub customer_ip: Option<String>,
    /// Encrypted wallet payload
    pub secured_card_data: Option<String>,

    // Shared page presentation
    pub logo_url: Option<String>,
    pub header_text: Option<String>,
    pub language: Option<String>,
    pub customer_read_only: Option<bool>,
    pub custom_view: Option<String>,
    pub verify_customer_phone: Option<bool>,
    pub verify_customer_email: Option<bool>,

    // Populated on query results
    pub authorisation_code: Option<String>,
    pub max_refund: Option<i32>,
    pub original_transaction_id: Option<i64>,
}

impl Default for Transaction {
    fn default() -> Self {
        Self {
            customer: None,
            shipping_details: None,
            payment_details: None,
            line_items: Vec::new(),
            options: Vec::new(),
            device_id: None,
            partner_id: None,
            transaction_type: TransactionType::Purchase,
            capture: true,
            save_customer: false,
            redirect_url: None,
            cancel_url: None,
            checkout_url: None,
            checkout_payment: None,
            customer_ip: None,
            secured_card_data: None,
            logo_url: None,
            header_text: None,
            language: None,
            customer_read_only: None,
            custom_view: None,
            verify_customer_phone: None,
            verify_customer_email: None,
            authorisation_code: None,
            max_refund: None,
            original_transaction_id: None,
        }
    }
}

impl Transaction {
    /// Purchase of `total_amount` cents for a customer.
    pub fn new(customer: Customer, total_amount: i32) -> Self {
        Self {
            customer: Some(customer),
            payment_details: Some(PaymentDetails::new(total_amount)),
            ..Default::default()
        }
    }

    /// Authorise only.
    pub fn auth_only(mut self) -> Self {
        self.capture = false;
        self
    }

    /// Stored-card token, taken from the embedded customer.
    pub fn token(&self) -> Option<&str> {
        self.customer.as_ref().and_then(Customer::token)
    }
}

/// Result of a card verification check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationStatus {
    #[default]
    Unchecked,
    Valid,
    Invalid,
    /// A value this library does not know
    Other(i32),
}

impl From<i32> for VerificationStatus {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Unchecked,
            1 => Self::Valid,
            2 => Self::Invalid,
            other => Self::Other(other),
        }
    }
}

/// Verification outcomes for a transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub cvn: VerificationStatus,
    pub address: VerificationStatus,
    pub email: VerificationStatus,
    pub mobile: VerificationStatus,
    pub phone: VerificationStatus,
    pub beagle_email: VerificationStatus,
    pub beagle_phone: VerificationStatus,
}

/// Processor outcome of a transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingDetails {
    pub authorisation_code: Option<String>,
    /// Bank response code, e.g. `00`
    pub response_code: Option<String>,
    /// Comma separated gateway response codes, e.g. `A2000`
    pub response_message: Option<String>,
}

/// Gateway-side status of a processed transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionStatus {
    pub transaction_id: i64,
    /// `true` when approved
    pub status: Option<bool>,
    /// Amount in cents
    pub total: i32,
    pub captured: Option<bool>,
    pub beagle_score: Option<f64>,
    pub fraud_action: Option<String>,
    pub verification_result: Option<VerificationResult>,
    pub processing_details: Option<ProcessingDetails>,
}

/// Query descriptor for a single transaction.
///
/// Valid when exactly one dimension is set and well formed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFilter {
    pub transaction_id: Option<i64>,
    pub access_code: Option<String>,
    pub invoice_number: Option<String>,
    pub invoice_reference: Option<String>,
}

impl TransactionFilter {
    /// Filter on a gateway transaction id.
    pub fn by_transaction_id(id: i64) -> Self {
        Self {
            transaction_id: Some(id),
            ..Default::default()
        }
    }

    /// Filter on an access code.
    pub fn by_access_code(code: impl Into<String>) -> Self {
        Self {
            access_code: Some(code.into()),
            ..Default::default()
        }
    }

    /// Filter on a merchant invoice number.
    pub fn by_invoice_number(number: impl Into<String>) -> Self {
        Self {
            invoice_number: Some(number.into()),
            ..Default::default()
        }
    }

    /// Filter on a merchant invoice reference.
    pub fn by_invoice_reference(reference: impl Into<String>) -> Self {
        Self {
            invoice_reference: Some(reference.into()),
            ..Default::default()
        }
    }
}

/// Refund amount and reference to the original transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundDetails {
    pub original_transaction_id: i64,
    /// Amount in cents
    pub total_amount: i32,
    pub invoice_number: Option<String>,
    pub invoice_description: Option<String>,
    pub invoice_reference: Option<String>,
    pub currency_code: Option<String>,
}

/// Refund of a previous transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    pub refund_details: RefundDetails,
    pub customer: Option<Customer>,
    pub shipping_details: Option<ShippingAddress>,
    pub line_items: Vec<LineItem>,
    pub options: Vec<String>,
    pub device_id: Option<String>,
    pub partner_id: Option<String>,
}

impl Refund {
    /// Refund `total_amount` cents of a transaction.
    pub fn new(original_transaction_id: i64, total_amount: i32) -> Self {
        Self {
            refund_details: RefundDetails {
                original_transaction_id,
                total_amount,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Capture of an earlier authorisation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturePaymentRequest {
    pub transaction_id: i64,
    pub payment_details: PaymentDetails,
}

/// Release of an earlier authorisation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelAuthorisationRequest {
    pub transaction_id: i64,
}

/// Which parts of a settlement report to return
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettlementSearchMode {
    #[default]
    Both,
    SummaryOnly,
    TransactionOnly,
}

impl SettlementSearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Both => "Both",
            Self::SummaryOnly => "SummaryOnly",
            Self::TransactionOnly => "TransactionOnly",
        }
    }
}

/// Card scheme filter for settlement search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardType {
    #[default]
    #[serde(rename = "ALL")]
    All,
    /// Visa
    #[serde(rename = "VI")]
    Visa,
    /// MasterCard
    #[serde(rename = "MC")]
    MasterCard,
    /// American Express
    #[serde(rename = "AX")]
    Amex,
    /// Diners Club
    #[serde(rename = "DC")]
    Diners,
    /// JCB
    #[serde(rename = "JC")]
    Jcb,
    /// Maestro
    #[serde(rename = "MD")]
    Maestro,
}

impl CardType {
    /// Gateway code for the scheme.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Visa => "VI",
            Self::MasterCard => "MC",
            Self::Amex => "AX",
            Self::Diners => "DC",
            Self::Jcb => "JC",
            Self::Maestro => "MD",
        }
    }
}

/// Settlement report query.
///
/// Either `settlement_date` or a `start_date`/`end_date` range is expected.
/// `page` and `page_size` of zero leave paging to the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementSearchRequest {
    pub report_mode: SettlementSearchMode,
    pub settlement_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub card_type: Option<CardType>,
    /// ISO 4217 code
    pub currency: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

/// Per card scheme totals inside a settlement summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSummaryPerCardType {
    pub card_type: Option<String>,
    pub number_of_transactions: i32,
    pub credit: i64,
    pub debit: i64,
    pub balance: i64,
}

/// Totals for one settlement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementSummary {
    pub settlement_id: Option<String>,
    pub currency: Option<String>,
    pub currency_code: Option<String>,
    pub total_credit: i64,
    pub total_debit: i64,
    pub total_balance: i64,
    pub balance_per_card_type: Vec<BalanceSummaryPerCardType>,
}

/// One settled transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementTransaction {
    pub settlement_id: Option<String>,
    pub transaction_id: i64,
    pub transaction_type: Option<String>,
    pub card_type: Option<String>,
    pub currency: Option<String>,
    pub currency_code: Option<String>,
    pub amount: i64,
    pub transaction_date_time: Option<String>,
    pub settlement_date_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_defaults_to_capture() {
        let tx = Transaction::new(Customer::default(), 1000);
        assert!(tx.capture);
        assert!(!tx.save_customer);
        assert_eq!(tx.transaction_type, TransactionType::Purchase);
        assert!(!tx.auth_only().capture);
    }

    #[test]
    fn test_token_ignores_blank_ids() {
        let mut customer = Customer {
            token_customer_id: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(customer.token(), None);
        assert_eq!(Transaction::new(customer.clone(), 1).token(), None);

        customer.token_customer_id = Some("917758625852".into());
        assert_eq!(customer.token(), Some("917758625852"));
        assert_eq!(
            Transaction::new(customer, 1).token(),
            Some("917758625852")
        );
    }

    #[test]
    fn test_verification_status_from_wire_value() {
        assert_eq!(VerificationStatus::from(0), VerificationStatus::Unchecked);
        assert_eq!(VerificationStatus::from(1), VerificationStatus::Valid);
        assert_eq!(VerificationStatus::from(2), VerificationStatus::Invalid);
        assert_eq!(VerificationStatus::from(7), VerificationStatus::Other(7));
    }

    #[test]
    fn test_refund_new() {
        let refund = Refund::new(11_223_344, 500);
        assert_eq!(refund.refund_details.original_transaction_id, 11_223_344);
        assert_eq!(refund.refund_details.total_amount, 500);
        assert!(refund.customer.is_none());
    }
}
