use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{parse_timestamp, IntentAction, PaymentIntent};

/// Request body for `POST /v3/payment_requests`
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRequestBody {
    pub reference_id: String,
    #[serde(rename = "type")]
    pub request_type: String,
    pub country: String,
    pub currency: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub request_amount: Decimal,
    pub capture_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_properties: Option<ChannelProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Channel-level settings for a payment request, currently the return URLs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_return_url: Option<String>,
}

impl ChannelProperties {
    pub fn is_empty(&self) -> bool {
        self.success_return_url.is_none()
            && self.failure_return_url.is_none()
            && self.cancel_return_url.is_none()
    }
}

/// Payment request object returned by `/v3/payment_requests`
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRequestResponse {
    #[serde(alias = "payment_request_id")]
    pub id: String,
    pub reference_id: String,
    pub status: String,
    #[serde(alias = "amount", with = "rust_decimal::serde::float")]
    pub request_amount: Decimal,
    pub currency: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub capture_method: Option<String>,
    #[serde(default)]
    pub channel_code: Option<String>,
    #[serde(default)]
    pub actions: Vec<IntentAction>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

impl From<PaymentRequestResponse> for PaymentIntent {
    fn from(response: PaymentRequestResponse) -> Self {
        let checkout_url = response
            .actions
            .iter()
            .find(|a| a.action_type == "REDIRECT_CUSTOMER")
            .and_then(|a| a.value.clone());

        PaymentIntent {
            id: response.id,
            reference_id: response.reference_id,
            status: response.status,
            amount: response.request_amount,
            paid_amount: None,
            currency: response.currency,
            country: response.country,
            capture_method: response.capture_method,
            channel_code: response.channel_code,
            checkout_url,
            actions: response.actions,
            created: parse_timestamp(response.created.as_ref()),
            updated: parse_timestamp(response.updated.as_ref()),
            metadata: response.metadata,
        }
    }
}
