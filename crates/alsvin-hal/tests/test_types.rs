//! Tests for boundary value types.

use alsvin_hal::{QramSpec, StorageKind};

#[test]
fn qram_spec_roundtrips_through_json() {
    let spec = QramSpec {
        address_width: 5,
        data_width: 50,
    };
    let json = serde_json::to_string(&spec).unwrap();
    let back: QramSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(back, spec);
}

#[test]
fn storage_kind_serialization_is_stable() {
    assert_eq!(
        serde_json::to_string(&StorageKind::UnsignedInteger).unwrap(),
        "\"UnsignedInteger\""
    );
    assert_eq!(
        serde_json::to_string(&StorageKind::Boolean).unwrap(),
        "\"Boolean\""
    );
}
