#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use rust_decimal_macros::dec;

use xenbridge::config::IntentStyle;
use xenbridge::core::{AppError, Currency};
use xenbridge::sessions::{PaymentProvider, SessionStatus, XenditProvider};

/// Capture is refused until the gateway reports the terminal paid status,
/// and the refusal carries the observed status for diagnostics
#[actix_web::test]
async fn test_capture_before_payment_is_not_ready() {
    let srv = spawn_gateway();
    let provider = XenditProvider::new(provider_config(&srv.url(""), IntentStyle::Link));

    let session = provider.initiate(initiate_idr(10000)).await.unwrap();
    let err = provider.capture(&session.intent.id).await.unwrap_err();

    match err {
        AppError::NotReady { observed } => assert_eq!(observed, "PENDING"),
        other => panic!("expected NotReady, got {:?}", other),
    }
}

#[actix_web::test]
async fn test_capture_after_payment_succeeds() {
    let srv = spawn_gateway();
    let provider = XenditProvider::new(provider_config(&srv.url(""), IntentStyle::Link));

    let session = provider.initiate(initiate_idr(10000)).await.unwrap();
    provider.simulate_payment(&session.intent.id).await.unwrap();

    let captured = provider.capture(&session.intent.id).await.unwrap();
    assert_eq!(captured.session_status, SessionStatus::Captured);
    assert_eq!(captured.intent.paid_amount, Some(dec!(10000)));
}

#[actix_web::test]
async fn test_refund_creates_refund_keyed_to_intent() {
    let srv = spawn_gateway();
    let provider = XenditProvider::new(provider_config(&srv.url(""), IntentStyle::Link));

    let session = provider.initiate(initiate_idr(10000)).await.unwrap();
    provider.simulate_payment(&session.intent.id).await.unwrap();

    let refund = provider
        .refund(
            &session.intent.id,
            dec!(4000),
            Currency::IDR,
            Some("REQUESTED_BY_CUSTOMER".to_string()),
        )
        .await
        .unwrap();

    assert_eq!(refund.status, "PENDING");
    assert_eq!(refund.amount, dec!(4000));
    assert_eq!(refund.intent_id(), Some(session.intent.id.as_str()));
    assert!(refund
        .reference_id
        .as_deref()
        .unwrap()
        .starts_with(&session.intent.id));
}

/// Link style: cancel issues an explicit expire call
#[actix_web::test]
async fn test_cancel_expires_link_intent() {
    let srv = spawn_gateway();
    let provider = XenditProvider::new(provider_config(&srv.url(""), IntentStyle::Link));

    let session = provider.initiate(initiate_idr(10000)).await.unwrap();
    let canceled = provider.cancel(&session.intent.id).await.unwrap();

    assert_eq!(canceled.intent.status, "EXPIRED");
    assert_eq!(canceled.session_status, SessionStatus::Canceled);
}

/// Direct style: the gateway has no explicit cancel; cancel is a no-op
/// retrieval and the intent keeps its current status
#[actix_web::test]
async fn test_cancel_is_noop_retrieval_for_direct_intent() {
    let srv = spawn_gateway();
    let provider = XenditProvider::new(provider_config(&srv.url(""), IntentStyle::Direct));

    let session = provider.initiate(initiate_idr(50000)).await.unwrap();
    let canceled = provider.cancel(&session.intent.id).await.unwrap();

    assert_eq!(canceled.intent.status, "REQUIRES_ACTION");
    assert_eq!(canceled.session_status, SessionStatus::Pending);
}

#[actix_web::test]
async fn test_delete_aliases_cancel() {
    let srv = spawn_gateway();
    let provider = XenditProvider::new(provider_config(&srv.url(""), IntentStyle::Link));

    let session = provider.initiate(initiate_idr(10000)).await.unwrap();
    let deleted = provider.delete(&session.intent.id).await.unwrap();

    assert_eq!(deleted.session_status, SessionStatus::Canceled);
}
