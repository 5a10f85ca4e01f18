//! Domain intents to wire requests
//!
//! Transaction requests leave `Method` at a neutral value; the dispatcher
//! tags them once it has picked a route.

use super::{Mapping, items_to_wire, map, options_to_wire};
use crate::types::{
    CancelAuthorisationRequest, CapturePaymentRequest, Customer, Refund, Transaction,
    TransactionType,
};
use crate::wire::{
    self, CreateAccessCodeRequest, CreateAccessCodeSharedRequest, DirectAuthorisationRequest,
    DirectCancelAuthorisationRequest, DirectCapturePaymentRequest, DirectPaymentRequest,
    DirectRefundRequest, Method,
};

fn payment(transaction: &Transaction) -> wire::Payment {
    transaction
        .payment_details
        .as_ref()
        .map(map)
        .unwrap_or_default()
}

impl Mapping<Transaction> for DirectPaymentRequest {
    fn map_from(transaction: &Transaction) -> Self {
        Self {
            customer: transaction.customer.as_ref().map(map),
            shipping_address: transaction.shipping_details.as_ref().map(map),
            items: items_to_wire(&transaction.line_items),
            options: options_to_wire(&transaction.options),
            payment: payment(transaction),
            redirect_url: transaction.redirect_url.clone(),
            customer_ip: transaction.customer_ip.clone(),
            device_id: transaction.device_id.clone(),
            partner_id: transaction.partner_id.clone(),
            transaction_type: transaction.transaction_type,
            method: Method::ProcessPayment,
            secured_card_data: transaction.secured_card_data.clone(),
        }
    }
}

impl Mapping<Transaction> for DirectAuthorisationRequest {
    fn map_from(transaction: &Transaction) -> Self {
        Self {
            customer: transaction.customer.as_ref().map(map),
            shipping_address: transaction.shipping_details.as_ref().map(map),
            items: items_to_wire(&transaction.line_items),
            options: options_to_wire(&transaction.options),
            payment: payment(transaction),
            customer_ip: transaction.customer_ip.clone(),
            device_id: transaction.device_id.clone(),
            partner_id: transaction.partner_id.clone(),
            transaction_type: transaction.transaction_type,
            method: Method::Authorise,
            secured_card_data: transaction.secured_card_data.clone(),
        }
    }
}

impl Mapping<Transaction> for CreateAccessCodeRequest {
    fn map_from(transaction: &Transaction) -> Self {
        Self {
            customer: transaction.customer.as_ref().map(map),
            shipping_address: transaction.shipping_details.as_ref().map(map),
            items: items_to_wire(&transaction.line_items),
            options: options_to_wire(&transaction.options),
            payment: payment(transaction),
            redirect_url: transaction.redirect_url.clone(),
            cancel_url: transaction.cancel_url.clone(),
            checkout_payment: transaction.checkout_payment,
            checkout_url: transaction.checkout_url.clone(),
            customer_ip: transaction.customer_ip.clone(),
            device_id: transaction.device_id.clone(),
            partner_id: transaction.partner_id.clone(),
            transaction_type: transaction.transaction_type,
            method: Method::ProcessPayment,
        }
    }
}

impl Mapping<Transaction> for CreateAccessCodeSharedRequest {
    fn map_from(transaction: &Transaction) -> Self {
        Self {
            access_code: map(transaction),
            logo_url: transaction.logo_url.clone(),
            header_text: transaction.header_text.clone(),
            language: transaction.language.clone(),
            customer_read_only: transaction.customer_read_only,
            custom_view: transaction.custom_view.clone(),
            verify_customer_phone: transaction.verify_customer_phone,
            verify_customer_email: transaction.verify_customer_email,
        }
    }
}

// Customer operations ride on the payment requests with a zero amount.

impl Mapping<Customer> for DirectPaymentRequest {
    fn map_from(customer: &Customer) -> Self {
        Self {
            customer: Some(map(customer)),
            redirect_url: customer.redirect_url.clone(),
            customer_ip: customer.customer_device_ip.clone(),
            transaction_type: TransactionType::Purchase,
            method: Method::CreateTokenCustomer,
            ..Default::default()
        }
    }
}

impl Mapping<Customer> for CreateAccessCodeRequest {
    fn map_from(customer: &Customer) -> Self {
        Self {
            customer: Some(map(customer)),
            redirect_url: customer.redirect_url.clone(),
            cancel_url: customer.cancel_url.clone(),
            customer_ip: customer.customer_device_ip.clone(),
            transaction_type: TransactionType::Purchase,
            method: Method::CreateTokenCustomer,
            ..Default::default()
        }
    }
}

impl Mapping<Customer> for CreateAccessCodeSharedRequest {
    fn map_from(customer: &Customer) -> Self {
        Self {
            access_code: map(customer),
            logo_url: customer.logo_url.clone(),
            header_text: customer.header_text.clone(),
            language: customer.language.clone(),
            customer_read_only: customer.customer_read_only,
            custom_view: customer.custom_view.clone(),
            verify_customer_phone: customer.verify_customer_phone,
            verify_customer_email: customer.verify_customer_email,
        }
    }
}

impl Mapping<Refund> for DirectRefundRequest {
    fn map_from(refund: &Refund) -> Self {
        let details = &refund.refund_details;
        Self {
            refund: wire::RefundDetails {
                transaction_id: Some(details.original_transaction_id.to_string()),
                total_amount: details.total_amount,
                invoice_number: details.invoice_number.clone(),
                invoice_description: details.invoice_description.clone(),
                invoice_reference: details.invoice_reference.clone(),
                currency_code: details.currency_code.clone(),
            },
            customer: refund.customer.as_ref().map(map),
            shipping_address: refund.shipping_details.as_ref().map(map),
            items: items_to_wire(&refund.line_items),
            options: options_to_wire(&refund.options),
            device_id: refund.device_id.clone(),
            partner_id: refund.partner_id.clone(),
        }
    }
}

impl Mapping<CapturePaymentRequest> for DirectCapturePaymentRequest {
    fn map_from(request: &CapturePaymentRequest) -> Self {
        Self {
            payment: map(&request.payment_details),
            transaction_id: request.transaction_id.to_string(),
        }
    }
}

impl Mapping<CancelAuthorisationRequest> for DirectCancelAuthorisationRequest {
    fn map_from(request: &CancelAuthorisationRequest) -> Self {
        Self {
            transaction_id: request.transaction_id.to_string(),
        }
    }
}
