use proptest::prelude::*;

use xenbridge::sessions::SessionStatus;

/// The required mapping table, both integration styles
#[test]
fn test_mapping_table_is_exact() {
    let table = [
        ("SUCCEEDED", SessionStatus::Authorized),
        ("PAID", SessionStatus::Authorized),
        ("SETTLED", SessionStatus::Authorized),
        ("REQUIRES_ACTION", SessionStatus::Pending),
        ("PENDING", SessionStatus::Pending),
        ("FAILED", SessionStatus::Error),
        ("CANCELED", SessionStatus::Canceled),
        ("EXPIRED", SessionStatus::Canceled),
    ];

    for (gateway_status, expected) in table {
        assert_eq!(
            SessionStatus::from_gateway(gateway_status),
            expected,
            "mapping for {}",
            gateway_status
        );
    }
}

#[test]
fn test_unknown_status_maps_to_pending() {
    for unknown in ["VOIDED", "AWAITING_CAPTURE", "", "🤷", "paid_out"] {
        assert_eq!(SessionStatus::from_gateway(unknown), SessionStatus::Pending);
    }
}

const KNOWN_LABELS: [&str; 8] = [
    "SUCCEEDED",
    "PAID",
    "SETTLED",
    "REQUIRES_ACTION",
    "PENDING",
    "FAILED",
    "CANCELED",
    "EXPIRED",
];

proptest! {
    /// Status lookup is total: any input maps without panicking, and
    /// anything outside the known label set maps to Pending.
    #[test]
    fn prop_mapper_never_fails(raw in ".*") {
        let status = SessionStatus::from_gateway(&raw);
        if !KNOWN_LABELS.contains(&raw.to_uppercase().as_str()) {
            prop_assert_eq!(status, SessionStatus::Pending);
        }
    }

    /// Mapping ignores case
    #[test]
    fn prop_mapper_case_insensitive(label in prop::sample::select(KNOWN_LABELS.as_slice())) {
        prop_assert_eq!(
            SessionStatus::from_gateway(&label.to_lowercase()),
            SessionStatus::from_gateway(label)
        );
    }
}
