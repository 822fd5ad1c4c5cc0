#![deny(unsafe_code)]
// Tests are allowed to use unwrap/expect for simplicity
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use crate::*;

#[test]
fn test_basic_generation() {
    let bundle = generate(32, "secure_prng").expect("Generation should succeed");

    assert_eq!(bundle.raw.len(), 32, "Raw bytes should match the requested length");
    assert_eq!(bundle.hex.len(), 64, "Hex form should be two characters per byte");
    assert_eq!(bundle.sha.len(), 64, "SHA-256 form should be 64 hex characters");
    assert_eq!(bundle.whirlpool.len(), 128, "Whirlpool form should be 128 hex characters");
    assert_eq!(
        bundle.shabytes.split(',').count(),
        32,
        "Decimal digest form should carry all 32 digest bytes"
    );
}

#[test]
fn test_hex_form_matches_raw_bytes() {
    let bundle = generate(16, "secure_prng").unwrap();

    assert_eq!(bundle.hex, bundle.hex.to_uppercase(), "Hex form should be uppercase");
    let decoded = hex::decode(&bundle.hex).expect("Hex form should decode");
    assert_eq!(decoded, bundle.raw, "Hex form should encode the raw bytes");
}

#[test]
fn test_generation_from_every_source() {
    let config = GeneratorConfig::for_development();

    for source in [EntropySource::SecurePrng, EntropySource::LibraryPrng] {
        let result = generate_with_config(16, source, &config);
        assert!(result.is_ok(), "Generation from {source} failed: {:?}", result.err());
    }
}

#[cfg(unix)]
#[test]
fn test_generation_from_raw_device() {
    let result = generate(16, "raw_device");
    assert!(result.is_ok(), "Raw device generation failed: {:?}", result.err());
}

#[test]
fn test_unknown_source_is_rejected() {
    let result = generate(32, "mcrypt");
    match result {
        Err(GenerationError::UnknownSource(name)) => assert_eq!(name, "mcrypt"),
        other => panic!("expected UnknownSource, got {other:?}"),
    }
}

#[test]
fn test_short_request_is_rejected() {
    let result = generate(4, "secure_prng");
    assert!(matches!(result, Err(GenerationError::InvalidLength { .. })));
}

#[test]
fn test_configuration_validation() {
    let config = GeneratorConfig::new();
    let result = config.validate();
    assert!(result.is_ok(), "Default config validation failed: {:?}", result.err());

    let invalid_config = GeneratorConfig::new().with_health_sample_size(4);
    let result = invalid_config.validate();
    assert!(result.is_err(), "Invalid config should fail validation");
}

#[test]
fn test_initialization() {
    let result = init();
    assert!(result.is_ok(), "Initialization failed: {:?}", result.err());

    let config = GeneratorConfig::new();
    let result = init_with_config(&config);
    assert!(result.is_ok(), "Initialization with config failed: {:?}", result.err());
}

#[test]
fn test_self_test_latch_is_set_after_init() {
    init().expect("Initialization should succeed");
    assert!(self_tests_passed(), "Self-test latch should be set after init");
}

#[test]
fn test_generation_without_explicit_init() {
    // The self-test gate runs lazily on the first request.
    let result = generate(32, "secure_prng");
    assert!(result.is_ok(), "Generation without init failed: {:?}", result.err());
    assert!(self_tests_passed());
}

#[test]
fn test_error_report_rendering() {
    let err = generate(32, "openssl").unwrap_err();
    let report = render_report(&err, LineBreak::HtmlBreak);
    assert!(report.contains("openssl"));
    assert!(report.ends_with("<br />"));
}

#[test]
fn test_version() {
    assert!(!VERSION.is_empty());
    assert!(VERSION.contains('.'));
}
