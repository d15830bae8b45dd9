use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod invoice;
pub mod payment_request;
pub mod refund;

pub use invoice::{InvoiceBody, InvoiceCustomer, InvoiceResponse};
pub use payment_request::{ChannelProperties, PaymentRequestBody, PaymentRequestResponse};
pub use refund::{RefundBody, RefundObject};

/// Error body returned by the Xendit API on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct XenditErrorBody {
    pub error_code: String,
    pub message: String,
}

/// A channel action descriptor attached to a direct-style payment request,
/// e.g. a customer redirect URL or a QR string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentAction {
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,
    #[serde(default, alias = "url", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Normalized snapshot of a gateway-side payment intent.
///
/// Both integration styles (direct payment request and hosted invoice)
/// convert into this shape, so everything above the gateway client is
/// style-agnostic. `status` carries the raw gateway label; mapping to the
/// host session status happens in the sessions module.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentIntent {
    /// Gateway-issued id
    pub id: String,
    /// Caller-supplied unique reference / external id
    pub reference_id: String,
    /// Raw gateway status label
    pub status: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub paid_amount: Option<Decimal>,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_code: Option<String>,
    /// Customer-facing redirect URL, when the gateway issued one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<IntentAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Parse a gateway timestamp leniently; the gateway is not consistent about
/// sub-second precision, and a missing timestamp must not fail a retrieval.
pub(crate) fn parse_timestamp(raw: Option<&String>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}
