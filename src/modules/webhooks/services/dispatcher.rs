use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use crate::core::error::{AppError, Result};

use super::super::models::{WebhookAction, WebhookActionAndData, WebhookActionData, WebhookEvent};

/// Webhook verifier & dispatcher.
///
/// Authenticates inbound calls against the configured callback token,
/// validates payload shape, and maps the gateway event/status to a host
/// action. Holds no state across calls: re-processing the same delivery
/// always produces the same result, which keeps the at-least-once redelivery
/// of the gateway safe. Side-effect idempotency belongs to the host's
/// webhook-processing layer.
#[derive(Clone)]
pub struct WebhookDispatcher {
    webhook_token: Option<String>,
}

impl WebhookDispatcher {
    pub fn new(webhook_token: Option<String>) -> Self {
        Self { webhook_token }
    }

    /// Verify the `x-callback-token` header against the configured secret.
    ///
    /// Missing or mismatched header rejects with `Unauthorized`. With no
    /// secret configured the call is accepted, but a security warning is
    /// logged on every delivery.
    pub fn verify(&self, token_header: Option<&str>) -> Result<()> {
        match &self.webhook_token {
            Some(expected) => match token_header {
                None => Err(AppError::unauthorized(
                    "Missing x-callback-token header on webhook request",
                )),
                Some(provided) if provided.as_bytes() == expected.as_bytes() => Ok(()),
                Some(_) => Err(AppError::unauthorized("Webhook callback token mismatch")),
            },
            None => {
                tracing::warn!(
                    "No webhook token configured; accepting webhook WITHOUT verification. \
                     Set XENDIT_WEBHOOK_TOKEN to authenticate gateway callbacks."
                );
                Ok(())
            }
        }
    }

    /// Validate payload shape and extract the event fields.
    ///
    /// Requires the event/status discriminator and the intent id; anything
    /// else is optional. Rejects with `BadRequest` when either is missing.
    pub fn parse(payload: &Value) -> Result<WebhookEvent> {
        // Envelope shape carries its fields under `data`; the flat invoice
        // callback is its own data object.
        let envelope_event = payload.get("event").and_then(Value::as_str);
        let data = payload.get("data").filter(|d| d.is_object()).unwrap_or(payload);

        let discriminator = envelope_event
            .or_else(|| data.get("status").and_then(Value::as_str))
            .or_else(|| payload.get("status").and_then(Value::as_str))
            .ok_or_else(|| {
                AppError::bad_request("Webhook payload is missing the event/status field")
            })?
            .to_string();

        let intent_id = ["payment_request_id", "invoice_id", "id"]
            .iter()
            .find_map(|key| data.get(*key).and_then(Value::as_str))
            .ok_or_else(|| AppError::bad_request("Webhook payload is missing the intent id"))?
            .to_string();

        let external_id = ["reference_id", "external_id"]
            .iter()
            .find_map(|key| data.get(*key).and_then(Value::as_str))
            .map(String::from);

        let amount = ["request_amount", "amount"]
            .iter()
            .find_map(|key| data.get(*key).and_then(decimal_value));

        Ok(WebhookEvent {
            discriminator,
            intent_id,
            external_id,
            amount,
            paid_amount: data.get("paid_amount").and_then(decimal_value),
            payment_method: data
                .get("payment_method")
                .and_then(Value::as_str)
                .map(String::from),
            raw: payload.clone(),
        })
    }

    /// Map a validated event to the host action + data tuple. Pure.
    pub fn dispatch(event: &WebhookEvent) -> WebhookActionAndData {
        // Envelope events look like "payment.succeeded"; the last segment is
        // the status label.
        let label = event
            .discriminator
            .rsplit('.')
            .next()
            .unwrap_or(&event.discriminator)
            .to_uppercase();

        let action = match label.as_str() {
            "SUCCEEDED" | "PAID" | "SETTLED" => WebhookAction::Authorized,
            "FAILED" | "EXPIRED" => WebhookAction::Failed,
            _ => WebhookAction::NotSupported,
        };

        let data = match action {
            WebhookAction::NotSupported => None,
            _ => Some(WebhookActionData {
                intent_id: event.intent_id.clone(),
                amount: event.realized_amount(),
            }),
        };

        WebhookActionAndData { action, data }
    }

    /// Parse and dispatch in one step
    pub fn action_for_payload(payload: &Value) -> Result<WebhookActionAndData> {
        let event = Self::parse(payload)?;
        Ok(Self::dispatch(&event))
    }
}

/// Gateway amounts arrive as JSON numbers or strings depending on the API
/// flavor; accept both.
fn decimal_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        Value::String(s) => Decimal::from_str(s).ok(),
        _ => None,
    }
}
