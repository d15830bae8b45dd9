use chrono::Utc;
use uuid::Uuid;

/// Generate a globally-unique reference id for a new payment intent.
///
/// Xendit deduplicates creation calls on this value, so two ids must never
/// collide even when generated within the same millisecond. The timestamp
/// keeps ids sortable in the gateway dashboard; the uuid suffix provides the
/// uniqueness.
pub fn payment_reference() -> String {
    let mut suffix = Uuid::new_v4().simple().to_string();
    suffix.truncate(10);
    format!("xb_{}_{}", Utc::now().timestamp_millis(), suffix)
}

/// Generate the reference id for a refund against an existing intent.
pub fn refund_reference(intent_id: &str) -> String {
    format!("{}-{}", intent_id, Utc::now().timestamp_millis())
}
