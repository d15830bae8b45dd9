use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

/// Host action derived from a webhook delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebhookAction {
    Authorized,
    Failed,
    /// Informational or unrecognized event; a no-op signal, not an error
    NotSupported,
}

/// Identifying data attached to an `Authorized`/`Failed` action
#[derive(Debug, Clone, Serialize)]
pub struct WebhookActionData {
    pub intent_id: String,
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,
}

/// The action + data tuple handed to the host's webhook-processing layer
#[derive(Debug, Clone, Serialize)]
pub struct WebhookActionAndData {
    pub action: WebhookAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<WebhookActionData>,
}

/// A validated inbound webhook notification.
///
/// Carries both webhook shapes the gateway sends: the flat invoice callback
/// and the `{event, data}` envelope of the payment-request API.
#[derive(Debug, Clone)]
pub struct WebhookEvent {
    /// Raw event name (`payment.succeeded`) or status label (`PAID`)
    pub discriminator: String,
    /// Gateway-issued intent id
    pub intent_id: String,
    /// Caller-supplied reference id, when delivered
    pub external_id: Option<String>,
    pub amount: Option<Decimal>,
    pub paid_amount: Option<Decimal>,
    pub payment_method: Option<String>,
    pub raw: Value,
}

impl WebhookEvent {
    /// The realized amount to report: the paid amount when present, else the
    /// requested amount
    pub fn realized_amount(&self) -> Option<Decimal> {
        self.paid_amount.or(self.amount)
    }
}
