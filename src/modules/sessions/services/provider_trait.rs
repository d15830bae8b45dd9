use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::core::{Currency, Result};
use crate::modules::gateway::RefundObject;
use crate::modules::webhooks::models::WebhookActionAndData;

use super::super::models::{InitiatePayment, PaymentSessionData, SessionStatus};

/// Payment-provider contract required by the host framework.
///
/// Every operation is an independent, stateless unit of work; concurrent
/// calls referencing the same intent rely on the gateway's reference-id
/// idempotency and the host's session-level serialization for ordering.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a payment intent and return its gateway-visible snapshot,
    /// including any customer-facing redirect URL or channel actions
    async fn initiate(&self, input: InitiatePayment) -> Result<PaymentSessionData>;

    /// Retrieve and map the current status; used by the host to confirm a
    /// session transitioned to a capturable state
    async fn authorize(&self, intent_id: &str) -> Result<PaymentSessionData>;

    /// Capture the intent. Fails `NotReady` unless the gateway reports the
    /// terminal paid/succeeded status.
    async fn capture(&self, intent_id: &str) -> Result<PaymentSessionData>;

    /// Create a refund against the intent
    async fn refund(
        &self,
        intent_id: &str,
        amount: Decimal,
        currency: Currency,
        reason: Option<String>,
    ) -> Result<RefundObject>;

    /// Cancel the intent: an explicit expire call for the invoice style, a
    /// no-op retrieval for the payment-request style (those self-expire)
    async fn cancel(&self, intent_id: &str) -> Result<PaymentSessionData>;

    /// Read-only snapshot, no side effects
    async fn retrieve(&self, intent_id: &str) -> Result<PaymentSessionData>;

    /// Gateway intents are immutable; `update` performs a fresh `initiate`.
    /// Callers must treat the returned id as potentially different from the
    /// original.
    async fn update(&self, input: InitiatePayment) -> Result<PaymentSessionData>;

    /// Aliases `cancel`
    async fn delete(&self, intent_id: &str) -> Result<PaymentSessionData>;

    /// Retrieve and map the status. Never fails: any retrieval problem
    /// degrades to `SessionStatus::Error` so the host's polling loop always
    /// receives a well-formed status.
    async fn get_status(&self, intent_id: &str) -> SessionStatus;

    /// Map an already-verified webhook payload to a host action + data tuple
    fn get_webhook_action_and_data(&self, payload: &Value) -> Result<WebhookActionAndData>;
}
