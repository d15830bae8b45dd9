#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{test, web, App};
use helpers::*;
use serde_json::{json, Value};

use xenbridge::config::IntentStyle;
use xenbridge::sessions::XenditProvider;
use xenbridge::webhooks::WebhookController;

const WEBHOOK_TOKEN: &str = "callback-token";

fn provider() -> web::Data<XenditProvider> {
    // The webhook path never calls out to the gateway, so the stub URL is
    // irrelevant here; only the token matters.
    web::Data::new(XenditProvider::new(provider_config(
        "https://api.xendit.co",
        IntentStyle::Link,
    )))
}

fn provider_without_token() -> web::Data<XenditProvider> {
    let mut config = provider_config("https://api.xendit.co", IntentStyle::Link);
    config.webhook_token = None;
    web::Data::new(XenditProvider::new(config))
}

fn paid_payload() -> Value {
    json!({
        "id": "inv-0001",
        "external_id": "xb_1722945600000_a1b2c3d4e5",
        "status": "PAID",
        "amount": 100000,
        "paid_amount": 100000,
        "payment_method": "QRIS"
    })
}

#[actix_web::test]
async fn test_paid_webhook_is_acknowledged_with_action() {
    let app = test::init_service(
        App::new()
            .app_data(provider())
            .configure(WebhookController::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/webhooks/xendit")
        .insert_header(("x-callback-token", WEBHOOK_TOKEN))
        .set_json(paid_payload())
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["received"], true);
    assert_eq!(body["action"], "AUTHORIZED");
    assert_eq!(body["data"]["intent_id"], "inv-0001");
    assert_eq!(body["data"]["amount"], json!(100000.0));
}

#[actix_web::test]
async fn test_mismatched_token_rejected_401() {
    let app = test::init_service(
        App::new()
            .app_data(provider())
            .configure(WebhookController::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/webhooks/xendit")
        .insert_header(("x-callback-token", "wrong-token"))
        .set_json(paid_payload())
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_missing_token_rejected_401() {
    let app = test::init_service(
        App::new()
            .app_data(provider())
            .configure(WebhookController::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/webhooks/xendit")
        .set_json(paid_payload())
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_unconfigured_token_accepts_delivery() {
    let app = test::init_service(
        App::new()
            .app_data(provider_without_token())
            .configure(WebhookController::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/webhooks/xendit")
        .set_json(paid_payload())
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_get_is_method_not_allowed() {
    let app = test::init_service(
        App::new()
            .app_data(provider())
            .configure(WebhookController::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/webhooks/xendit").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 405);
}

#[actix_web::test]
async fn test_pending_webhook_maps_to_not_supported() {
    let app = test::init_service(
        App::new()
            .app_data(provider())
            .configure(WebhookController::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/webhooks/xendit")
        .insert_header(("x-callback-token", WEBHOOK_TOKEN))
        .set_json(json!({"id": "inv-0002", "status": "PENDING"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["action"], "NOT_SUPPORTED");
    assert!(body.get("data").is_none());
}

/// Shape validation applies even with a valid token
#[actix_web::test]
async fn test_payload_without_intent_id_rejected_400() {
    let app = test::init_service(
        App::new()
            .app_data(provider())
            .configure(WebhookController::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/webhooks/xendit")
        .insert_header(("x-callback-token", WEBHOOK_TOKEN))
        .set_json(json!({"status": "PAID", "amount": 100}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_non_json_body_rejected_400() {
    let app = test::init_service(
        App::new()
            .app_data(provider())
            .configure(WebhookController::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/webhooks/xendit")
        .insert_header(("x-callback-token", WEBHOOK_TOKEN))
        .insert_header(("content-type", "application/json"))
        .set_payload("not json at all")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

/// Full HTTP round-trip through a real server socket, the way the gateway
/// actually delivers
#[actix_web::test]
async fn test_webhook_over_real_http() {
    let srv = actix_test::start(|| {
        App::new()
            .app_data(web::Data::new(XenditProvider::new(provider_config(
                "https://api.xendit.co",
                IntentStyle::Link,
            ))))
            .configure(WebhookController::configure)
    });

    let client = awc::Client::default();
    let mut resp = client
        .post(srv.url("/webhooks/xendit"))
        .insert_header(("x-callback-token", WEBHOOK_TOKEN))
        .send_json(&paid_payload())
        .await
        .expect("webhook delivery failed");

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["action"], "AUTHORIZED");
}

/// At-least-once delivery: redelivering the same event produces the same
/// acknowledgement
#[actix_web::test]
async fn test_redelivery_is_idempotent() {
    let app = test::init_service(
        App::new()
            .app_data(provider())
            .configure(WebhookController::configure),
    )
    .await;

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/webhooks/xendit")
            .insert_header(("x-callback-token", WEBHOOK_TOKEN))
            .set_json(paid_payload())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["action"], "AUTHORIZED");
        assert_eq!(body["data"]["intent_id"], "inv-0001");
    }
}
