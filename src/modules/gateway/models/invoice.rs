use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{parse_timestamp, PaymentIntent};

/// Request body for `POST /v2/invoices`
/// https://developers.xendit.co/api-reference/#create-invoice
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceBody {
    pub external_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<InvoiceCustomer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_redirect_url: Option<String>,
    /// Restricts the invoice to specific channels when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceCustomer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_names: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Invoice object returned by `/v2/invoices`
#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceResponse {
    pub id: String,
    pub external_id: String,
    pub status: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub paid_amount: Option<Decimal>,
    pub currency: String,
    #[serde(default)]
    pub invoice_url: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

impl From<InvoiceResponse> for PaymentIntent {
    fn from(response: InvoiceResponse) -> Self {
        PaymentIntent {
            id: response.id,
            reference_id: response.external_id,
            status: response.status,
            amount: response.amount,
            paid_amount: response.paid_amount,
            currency: response.currency,
            country: None,
            capture_method: None,
            channel_code: response.payment_method,
            checkout_url: response.invoice_url,
            actions: Vec::new(),
            created: parse_timestamp(response.created.as_ref()),
            updated: parse_timestamp(response.updated.as_ref()),
            metadata: response.metadata,
        }
    }
}
