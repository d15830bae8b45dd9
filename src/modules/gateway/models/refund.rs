use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for `POST /refunds`
///
/// Exactly one of `payment_request_id`/`invoice_id` is set, depending on the
/// configured intent style.
#[derive(Debug, Clone, Serialize)]
pub struct RefundBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    pub reference_id: String,
    pub currency: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Refund object returned by `/refunds`.
///
/// Immutable from this system's point of view once created; later status
/// changes arrive via retrieval or webhook only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundObject {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    /// `PENDING`, `SUCCEEDED` or `FAILED`
    pub status: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

impl RefundObject {
    /// The intent this refund is tied to, whichever style created it
    pub fn intent_id(&self) -> Option<&str> {
        self.payment_request_id
            .as_deref()
            .or(self.invoice_id.as_deref())
    }
}
