use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::config::{IntentStyle, ProviderConfig};
use crate::core::error::{AppError, Result};
use crate::core::{reference, Currency};
use crate::modules::gateway::models::RefundBody;
use crate::modules::gateway::{CreateIntent, RefundObject, XenditClient};
use crate::modules::webhooks::models::WebhookActionAndData;
use crate::modules::webhooks::services::WebhookDispatcher;

use super::super::models::{is_paid_status, InitiatePayment, PaymentSessionData, SessionStatus};
use super::provider_trait::PaymentProvider;

/// Xendit implementation of the host payment-provider contract.
///
/// Composes the gateway client, the status mapper and the webhook dispatcher.
/// Stateless aside from configuration; the gateway owns every intent's
/// lifecycle.
pub struct XenditProvider {
    client: XenditClient,
    dispatcher: WebhookDispatcher,
    config: ProviderConfig,
}

impl XenditProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: XenditClient::new(&config),
            dispatcher: WebhookDispatcher::new(config.webhook_token.clone()),
            config,
        }
    }

    pub fn dispatcher(&self) -> &WebhookDispatcher {
        &self.dispatcher
    }

    pub fn test_mode(&self) -> bool {
        self.config.test_mode
    }

    /// Test-mode helper: force an intent paid through the gateway's
    /// simulation call
    pub async fn simulate_payment(&self, intent_id: &str) -> Result<Value> {
        self.client
            .simulate_payment(intent_id)
            .await
            .map_err(|e| e.in_operation("simulate_payment"))
    }

    fn build_create_intent(&self, input: &InitiatePayment) -> Result<CreateIntent> {
        input
            .currency
            .validate_amount(input.amount)
            .map_err(AppError::invalid_request)?;

        Ok(CreateIntent {
            reference_id: reference::payment_reference(),
            amount: input.amount,
            currency: input.currency,
            country: input
                .country
                .clone()
                .unwrap_or_else(|| self.config.default_country.clone()),
            capture_method: self.config.default_capture_method,
            channel_code: input.channel_code.clone(),
            description: input.description.clone(),
            success_return_url: input.success_return_url.clone(),
            failure_return_url: input.failure_return_url.clone(),
            customer_email: input.customer_email.clone(),
            customer_name: input.customer_name.clone(),
            metadata: input.metadata.clone(),
        })
    }
}

#[async_trait]
impl PaymentProvider for XenditProvider {
    async fn initiate(&self, input: InitiatePayment) -> Result<PaymentSessionData> {
        let request = self.build_create_intent(&input)?;

        let intent = self
            .client
            .create_intent(&request)
            .await
            // Any client failure surfaces as InvalidRequest to the host
            .map_err(|e| AppError::invalid_request(format!("error in initiate_payment: {}", e)))?;

        Ok(PaymentSessionData::from_intent(intent))
    }

    async fn authorize(&self, intent_id: &str) -> Result<PaymentSessionData> {
        let intent = self
            .client
            .get_intent(intent_id)
            .await
            .map_err(|e| e.in_operation("authorize_payment"))?;

        Ok(PaymentSessionData::from_intent(intent))
    }

    async fn capture(&self, intent_id: &str) -> Result<PaymentSessionData> {
        let intent = self
            .client
            .get_intent(intent_id)
            .await
            .map_err(|e| e.in_operation("capture_payment"))?;

        if !is_paid_status(&intent.status) {
            tracing::warn!(
                intent_id = %intent_id,
                status = %intent.status,
                "Capture attempted before terminal paid state"
            );
            return Err(AppError::NotReady {
                observed: intent.status,
            });
        }

        Ok(PaymentSessionData {
            session_status: SessionStatus::Captured,
            intent,
        })
    }

    async fn refund(
        &self,
        intent_id: &str,
        amount: Decimal,
        currency: Currency,
        reason: Option<String>,
    ) -> Result<RefundObject> {
        let (payment_request_id, invoice_id) = match self.client.style() {
            IntentStyle::Direct => (Some(intent_id.to_string()), None),
            IntentStyle::Link => (None, Some(intent_id.to_string())),
        };

        let body = RefundBody {
            payment_request_id,
            invoice_id,
            reference_id: reference::refund_reference(intent_id),
            currency: currency.to_string(),
            amount,
            reason,
        };

        self.client
            .create_refund(&body)
            .await
            .map_err(|e| e.in_operation("refund_payment"))
    }

    async fn cancel(&self, intent_id: &str) -> Result<PaymentSessionData> {
        let intent = match self.client.style() {
            // Hosted invoices support an explicit expire call
            IntentStyle::Link => self
                .client
                .expire_intent(intent_id)
                .await
                .map_err(|e| e.in_operation("cancel_payment"))?,
            // Payment requests self-expire; cancel is a no-op retrieval
            IntentStyle::Direct => self
                .client
                .get_intent(intent_id)
                .await
                .map_err(|e| e.in_operation("cancel_payment"))?,
        };

        Ok(PaymentSessionData::from_intent(intent))
    }

    async fn retrieve(&self, intent_id: &str) -> Result<PaymentSessionData> {
        let intent = self
            .client
            .get_intent(intent_id)
            .await
            .map_err(|e| e.in_operation("retrieve_payment"))?;

        Ok(PaymentSessionData::from_intent(intent))
    }

    async fn update(&self, input: InitiatePayment) -> Result<PaymentSessionData> {
        // No update endpoint exists at the gateway; issue a fresh intent.
        // The returned id may differ from whatever the caller held before.
        self.initiate(input).await
    }

    async fn delete(&self, intent_id: &str) -> Result<PaymentSessionData> {
        self.cancel(intent_id).await
    }

    async fn get_status(&self, intent_id: &str) -> SessionStatus {
        match self.client.get_intent(intent_id).await {
            Ok(intent) => SessionStatus::from_gateway(&intent.status),
            Err(e) => {
                // The host's polling loop always gets a well-formed status
                tracing::warn!(
                    intent_id = %intent_id,
                    error = %e,
                    "Status retrieval failed; reporting error status"
                );
                SessionStatus::Error
            }
        }
    }

    fn get_webhook_action_and_data(&self, payload: &Value) -> Result<WebhookActionAndData> {
        WebhookDispatcher::action_for_payload(payload)
    }
}
