use reqwest::{Client, Response, StatusCode};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::config::{CaptureMethod, IntentStyle, ProviderConfig};
use crate::core::error::{AppError, Result};
use crate::core::Currency;

use super::super::models::{
    ChannelProperties, InvoiceBody, InvoiceCustomer, InvoiceResponse, PaymentIntent,
    PaymentRequestBody, PaymentRequestResponse, RefundBody, RefundObject, XenditErrorBody,
};

/// Xendit gateway client
///
/// Issues authenticated calls against either integration style and
/// normalizes both response shapes into [`PaymentIntent`]. Never retries on
/// its own; rate limits surface as [`AppError::RateLimited`] and retry policy
/// stays with the caller.
pub struct XenditClient {
    client: Client,
    api_key: String,
    base_url: String,
    style: IntentStyle,
}

/// Input for a creation call, assembled by the provider facade
#[derive(Debug, Clone)]
pub struct CreateIntent {
    pub reference_id: String,
    pub amount: Decimal,
    pub currency: Currency,
    pub country: String,
    pub capture_method: CaptureMethod,
    pub channel_code: Option<String>,
    pub description: Option<String>,
    pub success_return_url: Option<String>,
    pub failure_return_url: Option<String>,
    pub customer_email: Option<String>,
    pub customer_name: Option<String>,
    pub metadata: Option<Value>,
}

impl XenditClient {
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.api_url.trim_end_matches('/').to_string(),
            style: config.intent_style,
        }
    }

    pub fn style(&self) -> IntentStyle {
        self.style
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Create a payment intent via the configured style
    pub async fn create_intent(&self, request: &CreateIntent) -> Result<PaymentIntent> {
        let intent = match self.style {
            IntentStyle::Direct => {
                let body = PaymentRequestBody {
                    reference_id: request.reference_id.clone(),
                    request_type: "PAY".to_string(),
                    country: request.country.clone(),
                    currency: request.currency.to_string(),
                    request_amount: request.amount,
                    capture_method: request.capture_method.as_str().to_string(),
                    channel_code: request.channel_code.clone(),
                    channel_properties: Self::channel_properties(request),
                    description: request.description.clone(),
                    metadata: request.metadata.clone(),
                };
                let response: PaymentRequestResponse =
                    self.post_json("/v3/payment_requests", &body).await?;
                PaymentIntent::from(response)
            }
            IntentStyle::Link => {
                let customer = match (&request.customer_name, &request.customer_email) {
                    (None, None) => None,
                    (name, email) => Some(InvoiceCustomer {
                        given_names: name.clone(),
                        email: email.clone(),
                    }),
                };
                let body = InvoiceBody {
                    external_id: request.reference_id.clone(),
                    amount: request.amount,
                    currency: request.currency.to_string(),
                    description: request.description.clone(),
                    payer_email: request.customer_email.clone(),
                    customer,
                    success_redirect_url: request.success_return_url.clone(),
                    failure_redirect_url: request.failure_return_url.clone(),
                    payment_methods: request.channel_code.clone().map(|c| vec![c]),
                    metadata: request.metadata.clone(),
                };
                let response: InvoiceResponse = self.post_json("/v2/invoices", &body).await?;
                PaymentIntent::from(response)
            }
        };

        tracing::info!(
            intent_id = %intent.id,
            reference_id = %intent.reference_id,
            status = %intent.status,
            style = %self.style,
            "Created payment intent"
        );

        Ok(intent)
    }

    /// Retrieve an intent snapshot, read-only
    pub async fn get_intent(&self, intent_id: &str) -> Result<PaymentIntent> {
        match self.style {
            IntentStyle::Direct => {
                let path = format!("/v3/payment_requests/{}", intent_id);
                let response: PaymentRequestResponse = self.get_json(&path).await?;
                Ok(response.into())
            }
            IntentStyle::Link => {
                let path = format!("/v2/invoices/{}", intent_id);
                let response: InvoiceResponse = self.get_json(&path).await?;
                Ok(response.into())
            }
        }
    }

    /// Expire a hosted invoice. Only valid for the link style; direct-style
    /// payment requests self-expire at the gateway.
    pub async fn expire_intent(&self, intent_id: &str) -> Result<PaymentIntent> {
        match self.style {
            IntentStyle::Link => {
                let path = format!("/v2/invoices/{}/expire!", intent_id);
                let response: InvoiceResponse = self.post_empty(&path).await?;
                tracing::info!(intent_id = %intent_id, "Expired invoice");
                Ok(response.into())
            }
            IntentStyle::Direct => Err(AppError::invalid_request(
                "payment requests cannot be expired explicitly",
            )),
        }
    }

    /// Create a refund against an intent
    pub async fn create_refund(&self, body: &RefundBody) -> Result<RefundObject> {
        let refund: RefundObject = self.post_json("/refunds", body).await?;
        tracing::info!(
            refund_id = %refund.id,
            intent_id = refund.intent_id().unwrap_or("unknown"),
            status = %refund.status,
            "Created refund"
        );
        Ok(refund)
    }

    /// Force an intent paid through the gateway's test-mode simulation call
    pub async fn simulate_payment(&self, intent_id: &str) -> Result<Value> {
        let path = match self.style {
            IntentStyle::Link => format!("/v2/invoices/{}/simulate_payment", intent_id),
            IntentStyle::Direct => format!("/v3/payment_requests/{}/simulate", intent_id),
        };
        self.post_empty(&path).await
    }

    fn channel_properties(request: &CreateIntent) -> Option<ChannelProperties> {
        let properties = ChannelProperties {
            success_return_url: request.success_return_url.clone(),
            failure_return_url: request.failure_return_url.clone(),
            cancel_return_url: None,
        };
        if properties.is_empty() {
            None
        } else {
            Some(properties)
        }
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(path))
            .basic_auth(&self.api_key, Some(""))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(Self::transport_error)?;

        Self::parse_response(response).await
    }

    async fn post_empty<T>(&self, path: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(path))
            .basic_auth(&self.api_key, Some(""))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(Self::transport_error)?;

        Self::parse_response(response).await
    }

    async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .get(self.url(path))
            .basic_auth(&self.api_key, Some(""))
            .send()
            .await
            .map_err(Self::transport_error)?;

        Self::parse_response(response).await
    }

    async fn parse_response<T>(response: Response) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::internal(format!("Failed to parse Xendit response: {}", e)))
    }

    fn transport_error(e: reqwest::Error) -> AppError {
        if e.is_timeout() || e.is_connect() {
            AppError::UpstreamUnavailable(format!(
                "Xendit gateway unavailable: {} ({})",
                if e.is_timeout() {
                    "timeout"
                } else {
                    "connection failed"
                },
                e
            ))
        } else {
            AppError::internal(format!("Xendit request failed: {}", e))
        }
    }

    /// Categorize a non-2xx gateway response per the error taxonomy
    async fn error_from_response(response: Response) -> AppError {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = Self::header_u64(&response, "retry-after");
            tracing::warn!(
                limit = Self::header_str(&response, "rate-limit-limit").as_deref(),
                remaining = Self::header_str(&response, "rate-limit-remaining").as_deref(),
                reset = Self::header_str(&response, "rate-limit-reset").as_deref(),
                retry_after = retry_after,
                "Xendit rate limit exceeded"
            );
            return AppError::RateLimited {
                message: "Xendit API rate limit exceeded".to_string(),
                retry_after,
            };
        }

        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<XenditErrorBody>(&body) {
            Ok(error_body) => Self::categorize(status, &error_body),
            // Error body is not JSON; carry the raw HTTP status text
            Err(_) => Self::categorize_status(
                status,
                format!(
                    "Xendit API error {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("unknown error")
                ),
            ),
        }
    }

    fn categorize(status: StatusCode, body: &XenditErrorBody) -> AppError {
        let message = format!("{}: {}", body.error_code, body.message);
        if status == StatusCode::UNAUTHORIZED || Self::is_auth_error(&body.error_code) {
            AppError::Unauthorized(message)
        } else {
            Self::categorize_status(status, message)
        }
    }

    fn categorize_status(status: StatusCode, message: String) -> AppError {
        match status {
            StatusCode::UNAUTHORIZED => AppError::Unauthorized(message),
            StatusCode::NOT_FOUND => AppError::NotFound(message),
            s if s.is_server_error() => AppError::UpstreamUnavailable(message),
            // 400, validation codes and anything else non-2xx
            _ => AppError::InvalidRequest(message),
        }
    }

    fn is_auth_error(error_code: &str) -> bool {
        error_code.contains("API_KEY") || error_code == "UNAUTHORIZED"
    }

    fn header_str(response: &Response, name: &str) -> Option<String> {
        response
            .headers()
            .get(name)
            .and_then(|h| h.to_str().ok())
            .map(String::from)
    }

    fn header_u64(response: &Response, name: &str) -> Option<u64> {
        Self::header_str(response, name).and_then(|v| v.parse().ok())
    }
}
