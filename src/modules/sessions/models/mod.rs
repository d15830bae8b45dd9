use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::Currency;
use crate::modules::gateway::PaymentIntent;

/// Host-framework payment session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Pending,
    Authorized,
    Captured,
    Canceled,
    Error,
}

impl SessionStatus {
    /// Map a raw gateway status label to the host session status.
    ///
    /// Total over all inputs: unrecognized labels map to `Pending` so a
    /// status lookup never fails on a label this crate has not seen before.
    pub fn from_gateway(raw: &str) -> Self {
        match raw.to_uppercase().as_str() {
            "SUCCEEDED" | "PAID" | "SETTLED" => SessionStatus::Authorized,
            "REQUIRES_ACTION" | "PENDING" => SessionStatus::Pending,
            "FAILED" => SessionStatus::Error,
            "CANCELED" | "EXPIRED" => SessionStatus::Canceled,
            _ => SessionStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Pending => "pending",
            SessionStatus::Authorized => "authorized",
            SessionStatus::Captured => "captured",
            SessionStatus::Canceled => "canceled",
            SessionStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// True for the terminal paid/succeeded gateway labels, the only states
/// capture is allowed from
pub fn is_paid_status(raw: &str) -> bool {
    matches!(
        raw.to_uppercase().as_str(),
        "SUCCEEDED" | "PAID" | "SETTLED"
    )
}

/// Input to `initiate`: what the host knows about the payment to collect
#[derive(Debug, Clone, Deserialize)]
pub struct InitiatePayment {
    pub amount: Decimal,
    pub currency: Currency,
    /// Overrides the configured default country for direct-style requests
    #[serde(default)]
    pub country: Option<String>,
    /// Channel / payment-method selection, e.g. an e-wallet brand
    #[serde(default)]
    pub channel_code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub success_return_url: Option<String>,
    #[serde(default)]
    pub failure_return_url: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    /// Free-form host metadata (session id, customer id, integration tag)
    #[serde(default)]
    pub metadata: Option<Value>,
}

/// Snapshot returned to the host after any provider operation
#[derive(Debug, Clone, Serialize)]
pub struct PaymentSessionData {
    pub session_status: SessionStatus,
    pub intent: PaymentIntent,
}

impl PaymentSessionData {
    /// Wrap an intent snapshot, deriving the session status from its raw
    /// gateway status
    pub fn from_intent(intent: PaymentIntent) -> Self {
        Self {
            session_status: SessionStatus::from_gateway(&intent.status),
            intent,
        }
    }
}
