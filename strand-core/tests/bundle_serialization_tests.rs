//! Serialization tests for the derived bundle wire format
//!
//! The JSON field names of `DerivedBundle` are a wire contract with
//! existing consumers. These tests pin the names, the field set, and the
//! serialized order so a rename or reorder fails loudly here instead of
//! in a downstream system.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    clippy::panic_in_result_fn,
    clippy::unnecessary_wraps,
    clippy::redundant_clone
)]

use std::collections::BTreeSet;

use strand_core::{DerivedBundle, generate};

const WIRE_FIELDS: [&str; 5] = ["raw", "hex", "sha", "shabytes", "whirlpool"];

// ============================================================================
// Field Name Contract
// ============================================================================

#[test]
fn test_bundle_serializes_exactly_the_wire_fields() {
    let bundle = DerivedBundle::from_raw(b"wire contract".to_vec());
    let value = serde_json::to_value(&bundle).expect("serialization should succeed");

    let object = value.as_object().expect("bundle should serialize as an object");
    let keys: BTreeSet<&str> = object.keys().map(String::as_str).collect();
    let expected: BTreeSet<&str> = WIRE_FIELDS.into_iter().collect();

    assert_eq!(keys, expected);
}

#[test]
fn test_bundle_serializes_fields_in_wire_order() {
    let bundle = DerivedBundle::from_raw(b"field order".to_vec());
    let document = serde_json::to_string(&bundle).expect("serialization should succeed");

    let positions: Vec<usize> = WIRE_FIELDS
        .iter()
        .map(|field| {
            document
                .find(&format!("\"{field}\""))
                .unwrap_or_else(|| panic!("field {field} missing from {document}"))
        })
        .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted, "Fields serialized out of wire order: {document}");
}

#[test]
fn test_bundle_raw_serializes_as_byte_array() {
    let bundle = DerivedBundle::from_raw(vec![0, 127, 255]);
    let value = serde_json::to_value(&bundle).expect("serialization should succeed");

    let raw = value["raw"].as_array().expect("raw should be an array");
    assert_eq!(raw.len(), 3);
    assert_eq!(raw[0], 0);
    assert_eq!(raw[1], 127);
    assert_eq!(raw[2], 255);
}

// ============================================================================
// Known-Answer Documents
// ============================================================================

#[test]
fn test_bundle_for_known_input_serializes_known_digests() {
    let bundle = DerivedBundle::from_raw(b"abc".to_vec());
    let value = serde_json::to_value(&bundle).expect("serialization should succeed");

    assert_eq!(value["hex"], "616263");
    assert_eq!(
        value["sha"],
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(
        value["whirlpool"],
        "4e2448a4c6f486bb16b6562c73b4020bf3043e3a731bce721ae1b303d97e6d4c\
         7181eebdb6c57e277d0e34957114cbd6c797fc9d95d8b582d225292076d4eef5"
    );
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_bundle_round_trips_through_json() {
    let bundle = DerivedBundle::from_raw(vec![7u8; 32]);

    let document = serde_json::to_string(&bundle).expect("serialization should succeed");
    let restored: DerivedBundle =
        serde_json::from_str(&document).expect("deserialization should succeed");

    assert_eq!(bundle, restored);
}

#[test]
fn test_generated_bundle_round_trips_through_json() {
    let bundle = generate(32, "secure_prng").expect("generation should succeed");

    let document = serde_json::to_string(&bundle).expect("serialization should succeed");
    let restored: DerivedBundle =
        serde_json::from_str(&document).expect("deserialization should succeed");

    assert_eq!(bundle, restored);
}

#[test]
fn test_bundle_rejects_documents_missing_a_field() {
    let document = r#"{"raw":[1,2,3],"hex":"010203","sha":"","shabytes":""}"#;
    let result: Result<DerivedBundle, _> = serde_json::from_str(document);

    assert!(result.is_err(), "Document without whirlpool field must not deserialize");
}
