//! Domain ⇄ wire field mapping
//!
//! Each supported (source, destination) pair is one [`Mapping`] impl, so the
//! set of impls is the mapping table and a missing pair is a compile error.
//! Mappings are total: absent source fields become absent destination
//! fields.
//!
//! Response mappings first apply the shared error field through
//! [`base_response`] and then fill the shape specific fields.

mod request;
mod response;

use crate::response::BaseResponse;
use crate::types::{
    Address, CardDetails, Customer, LineItem, PaymentDetails, ShippingAddress, TransactionType,
    VerificationResult,
};
use crate::wire::{self, CustomerFields, WireResponse};
use tracing::warn;

/// Build `Self` from a `Source` shape.
pub trait Mapping<Source: ?Sized> {
    fn map_from(source: &Source) -> Self;
}

/// Map `source` into the destination shape picked by inference.
pub fn map<S: ?Sized, D: Mapping<S>>(source: &S) -> D {
    D::map_from(source)
}

/// Split a comma separated error string into trimmed codes.
///
/// `None`, blank, or nothing but separators gives `None`, never an empty list.
pub fn split_errors(errors: Option<&str>) -> Option<Vec<String>> {
    let codes: Vec<String> = errors?
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(String::from)
        .collect();

    if codes.is_empty() { None } else { Some(codes) }
}

/// Inverse of [`split_errors`].
pub fn join_errors(codes: &[String]) -> String {
    codes.join(",")
}

/// A destination result carrying only the source's error codes.
pub(crate) fn base_response<S: WireResponse, D: BaseResponse>(source: &S) -> D {
    let mut destination = D::default();
    destination.set_errors(split_errors(source.errors()));
    destination
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}

fn address_from_fields(fields: &CustomerFields) -> Option<Address> {
    let address = Address {
        street1: fields.street1.clone(),
        street2: fields.street2.clone(),
        city: fields.city.clone(),
        state: fields.state.clone(),
        country: fields.country.clone(),
        postal_code: fields.postal_code.clone(),
    };
    (!address.is_empty()).then_some(address)
}

impl Mapping<Customer> for CustomerFields {
    fn map_from(customer: &Customer) -> Self {
        let address = customer.address.clone().unwrap_or_default();
        Self {
            reference: customer.reference.clone(),
            title: customer.title.clone(),
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            company_name: customer.company_name.clone(),
            job_description: customer.job_description.clone(),
            street1: address.street1,
            street2: address.street2,
            city: address.city,
            state: address.state,
            postal_code: address.postal_code,
            country: address.country,
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            mobile: customer.mobile.clone(),
            comments: customer.comments.clone(),
            fax: customer.fax.clone(),
            url: customer.url.clone(),
        }
    }
}

impl Mapping<CustomerFields> for Customer {
    fn map_from(fields: &CustomerFields) -> Self {
        Self {
            reference: fields.reference.clone(),
            title: fields.title.clone(),
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            company_name: fields.company_name.clone(),
            job_description: fields.job_description.clone(),
            address: address_from_fields(fields),
            phone: fields.phone.clone(),
            mobile: fields.mobile.clone(),
            email: fields.email.clone(),
            fax: fields.fax.clone(),
            url: fields.url.clone(),
            comments: fields.comments.clone(),
            ..Default::default()
        }
    }
}

impl Mapping<CardDetails> for wire::CardDetails {
    fn map_from(card: &CardDetails) -> Self {
        Self {
            name: card.name.clone(),
            number: card.number.clone(),
            expiry_month: card.expiry_month.clone(),
            expiry_year: card.expiry_year.clone(),
            start_month: card.start_month.clone(),
            start_year: card.start_year.clone(),
            issue_number: card.issue_number.clone(),
            cvn: card.cvn.clone(),
        }
    }
}

impl Mapping<wire::CardDetails> for CardDetails {
    fn map_from(card: &wire::CardDetails) -> Self {
        Self {
            name: card.name.clone(),
            number: card.number.clone(),
            expiry_month: card.expiry_month.clone(),
            expiry_year: card.expiry_year.clone(),
            start_month: card.start_month.clone(),
            start_year: card.start_year.clone(),
            issue_number: card.issue_number.clone(),
            cvn: card.cvn.clone(),
        }
    }
}

impl Mapping<Customer> for wire::DirectTokenCustomer {
    fn map_from(customer: &Customer) -> Self {
        Self {
            token_customer_id: customer.token_customer_id.clone(),
            fields: map(customer),
            card_details: customer.card_details.as_ref().map(map),
        }
    }
}

impl Mapping<wire::DirectTokenCustomer> for Customer {
    fn map_from(customer: &wire::DirectTokenCustomer) -> Self {
        Self {
            token_customer_id: customer.token_customer_id.clone(),
            card_details: customer
                .card_details
                .as_ref()
                .map(map::<_, CardDetails>)
                .filter(|card| !card.is_empty()),
            ..map(&customer.fields)
        }
    }
}

impl Mapping<Customer> for wire::TokenCustomer {
    fn map_from(customer: &Customer) -> Self {
        let card = customer.card_details.clone().unwrap_or_default();
        Self {
            token_customer_id: customer.token().and_then(|id| match id.trim().parse() {
                Ok(id) => Some(id),
                Err(_) => {
                    warn!(token_customer_id = id, "Dropping non-numeric token customer id");
                    None
                }
            }),
            fields: map(customer),
            card_name: card.name,
            card_number: card.number,
            card_expiry_month: card.expiry_month,
            card_expiry_year: card.expiry_year,
            card_start_month: card.start_month,
            card_start_year: card.start_year,
            card_issue_number: card.issue_number,
        }
    }
}

impl Mapping<wire::TokenCustomer> for Customer {
    fn map_from(customer: &wire::TokenCustomer) -> Self {
        let card = CardDetails {
            name: non_blank(&customer.card_name),
            number: non_blank(&customer.card_number),
            expiry_month: non_blank(&customer.card_expiry_month),
            expiry_year: non_blank(&customer.card_expiry_year),
            start_month: non_blank(&customer.card_start_month),
            start_year: non_blank(&customer.card_start_year),
            issue_number: non_blank(&customer.card_issue_number),
            cvn: None,
        };
        Self {
            token_customer_id: customer.token_customer_id.map(|id| id.to_string()),
            card_details: (!card.is_empty()).then_some(card),
            ..map(&customer.fields)
        }
    }
}

impl Mapping<ShippingAddress> for wire::ShippingAddress {
    fn map_from(shipping: &ShippingAddress) -> Self {
        let address = shipping.address.clone().unwrap_or_default();
        Self {
            shipping_method: shipping.shipping_method.clone(),
            first_name: shipping.first_name.clone(),
            last_name: shipping.last_name.clone(),
            street1: address.street1,
            street2: address.street2,
            city: address.city,
            state: address.state,
            country: address.country,
            postal_code: address.postal_code,
            email: shipping.email.clone(),
            phone: shipping.phone.clone(),
            fax: shipping.fax.clone(),
        }
    }
}

impl Mapping<wire::ShippingAddress> for ShippingAddress {
    fn map_from(shipping: &wire::ShippingAddress) -> Self {
        let address = Address {
            street1: shipping.street1.clone(),
            street2: shipping.street2.clone(),
            city: shipping.city.clone(),
            state: shipping.state.clone(),
            country: shipping.country.clone(),
            postal_code: shipping.postal_code.clone(),
        };
        Self {
            shipping_method: shipping.shipping_method.clone(),
            first_name: shipping.first_name.clone(),
            last_name: shipping.last_name.clone(),
            address: (!address.is_empty()).then_some(address),
            email: shipping.email.clone(),
            phone: shipping.phone.clone(),
            fax: shipping.fax.clone(),
        }
    }
}

impl Mapping<LineItem> for wire::LineItem {
    fn map_from(item: &LineItem) -> Self {
        Self {
            sku: item.sku.clone(),
            description: item.description.clone(),
            quantity: item.quantity,
            unit_cost: item.unit_cost,
            tax: item.tax,
            total: item.total,
        }
    }
}

impl Mapping<PaymentDetails> for wire::Payment {
    fn map_from(payment: &PaymentDetails) -> Self {
        Self {
            total_amount: payment.total_amount,
            invoice_number: payment.invoice_number.clone(),
            invoice_description: payment.invoice_description.clone(),
            invoice_reference: payment.invoice_reference.clone(),
            currency_code: payment.currency_code.clone(),
        }
    }
}

impl Mapping<wire::Payment> for PaymentDetails {
    fn map_from(payment: &wire::Payment) -> Self {
        Self {
            total_amount: payment.total_amount,
            invoice_number: payment.invoice_number.clone(),
            invoice_description: payment.invoice_description.clone(),
            invoice_reference: payment.invoice_reference.clone(),
            currency_code: payment.currency_code.clone(),
        }
    }
}

fn items_to_wire(items: &[LineItem]) -> Option<Vec<wire::LineItem>> {
    (!items.is_empty()).then(|| items.iter().map(map).collect())
}

fn options_to_wire(options: &[String]) -> Option<Vec<wire::OptionValue>> {
    (!options.is_empty()).then(|| {
        options
            .iter()
            .map(|value| wire::OptionValue {
                value: Some(value.clone()),
            })
            .collect()
    })
}

fn options_from_wire(options: &[wire::OptionValue]) -> Vec<String> {
    options.iter().filter_map(|o| o.value.clone()).collect()
}

fn transaction_type_from_wire(value: Option<&str>) -> TransactionType {
    match value {
        Some("Recurring") => TransactionType::Recurring,
        Some("MOTO") => TransactionType::Moto,
        _ => TransactionType::Purchase,
    }
}

fn verification_from_wire(
    verification: Option<&wire::Verification>,
    beagle: Option<&wire::BeagleVerification>,
) -> Option<VerificationResult> {
    if verification.is_none() && beagle.is_none() {
        return None;
    }
    let verification = verification.cloned().unwrap_or_default();
    let beagle = beagle.cloned().unwrap_or_default();
    Some(VerificationResult {
        cvn: verification.cvn.into(),
        address: verification.address.into(),
        email: verification.email.into(),
        mobile: verification.mobile.into(),
        phone: verification.phone.into(),
        beagle_email: beagle.email.into(),
        beagle_phone: beagle.phone.into(),
    })
}
