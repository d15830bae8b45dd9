use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::core::error::{AppError, Result};
use crate::modules::sessions::{PaymentProvider, XenditProvider};

use super::super::models::WebhookActionAndData;

/// Webhook intake for gateway callbacks
///
/// `POST /webhooks/xendit` authenticates the delivery, validates the payload
/// shape and acknowledges with 200 before any downstream processing; the
/// mapped action/data tuple rides along in the ack body. Any other method on
/// the route answers 405.
pub struct WebhookController;

impl WebhookController {
    /// Configure webhook routes
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.service(
            web::resource("/webhooks/xendit")
                .route(web::post().to(process_webhook))
                .route(web::route().to(method_not_allowed)),
        );
    }
}

/// Acknowledgement body returned on accepted deliveries
#[derive(Debug, Serialize)]
struct WebhookAck {
    received: bool,
    #[serde(flatten)]
    result: WebhookActionAndData,
}

async fn process_webhook(
    req: HttpRequest,
    body: web::Bytes,
    provider: web::Data<XenditProvider>,
) -> Result<HttpResponse> {
    let token = req
        .headers()
        .get("x-callback-token")
        .and_then(|h| h.to_str().ok());

    provider.dispatcher().verify(token)?;

    let payload: Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::bad_request(format!("Webhook body is not valid JSON: {}", e)))?;

    let result = provider.get_webhook_action_and_data(&payload)?;

    info!(
        action = ?result.action,
        intent_id = result
            .data
            .as_ref()
            .map(|d| d.intent_id.as_str())
            .unwrap_or("-"),
        "Webhook accepted"
    );

    // Acknowledge now; the gateway redelivers on timeout, and applying the
    // action is the host's job, keyed off the tuple in the ack body.
    Ok(HttpResponse::Ok().json(WebhookAck {
        received: true,
        result,
    }))
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(serde_json::json!({
        "error": {
            "message": "Webhook endpoint accepts POST only",
            "code": 405,
        }
    }))
}
