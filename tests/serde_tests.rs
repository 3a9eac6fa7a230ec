#![cfg(all(feature = "serde", feature = "control"))]

//! Integration tests for serde support.
//!
//! Type tags round-trip through JSON; descriptors and capability sets
//! serialize for introspection.

use algebox::control::{StarFamily, Tuple, tuple2};
use algebox::typeclass::{Capability, Identity, TypeTag};
use rstest::rstest;

// =============================================================================
// TypeTag
// =============================================================================

#[rstest]
fn test_type_tag_json_roundtrip() {
    let tag = StarFamily::new(&Identity::type_rep()).unwrap().tag().clone();

    let json = serde_json::to_string(&tag).unwrap();
    let restored: TypeTag = serde_json::from_str(&json).unwrap();

    assert_eq!(tag, restored);
    assert!(restored.is_same_nominal(&tag));
}

#[rstest]
fn test_type_tag_json_shape() {
    let json = serde_json::to_value(tuple2(1, 2).tag()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "name": "2-Tuple", "qualified": "algebox/Tuple@1" })
    );
}

// =============================================================================
// Capabilities and descriptors
// =============================================================================

#[rstest]
#[case(Capability::Map, "\"map\"")]
#[case(Capability::Contramap, "\"contramap\"")]
#[case(Capability::Of, "\"of\"")]
fn test_capability_serializes_as_method_name(#[case] capability: Capability, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&capability).unwrap(), expected);
    let restored: Capability = serde_json::from_str(expected).unwrap();
    assert_eq!(restored, capability);
}

#[rstest]
fn test_descriptor_serialization() {
    let json = serde_json::to_value(Tuple::DESCRIPTOR).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Tuple",
            "version": 1,
            "capabilities": ["concat", "equals", "map"],
        })
    );
}

#[rstest]
fn test_unversioned_descriptor_serialization() {
    let json = serde_json::to_value(Identity::DESCRIPTOR).unwrap();
    assert_eq!(json["version"], serde_json::Value::Null);
    assert_eq!(json["capabilities"][0], "ap");
}
