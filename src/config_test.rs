#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_stock_site() {
    let config = FxConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.scroll_debounce_ms, 10);
    assert_eq!(config.direction_throttle_ms, 100);
    assert_eq!(config.header_shadow_px, 50.0);
    assert_eq!(config.cursor_primary_smoothing, 0.15);
    assert_eq!(config.cursor_secondary_smoothing, 0.3);
    assert_eq!(config.ripple_duration_ms, 600);
    assert_eq!(config.contact_endpoint, "contact-form.php");
}

#[test]
fn partial_override_keeps_remaining_defaults() {
    let config = FxConfig::from_json(r#"{ "scrollDebounceMs": 25, "fallbackEmail": "me@example.com" }"#)
        .expect("override should parse");
    assert_eq!(config.scroll_debounce_ms, 25);
    assert_eq!(config.fallback_email, "me@example.com");
    assert_eq!(config.direction_throttle_ms, 100);
    assert_eq!(config.storage_key, "theme");
}

#[test]
fn empty_object_is_default() {
    let config = FxConfig::from_json("{}").expect("empty object should parse");
    assert_eq!(config, FxConfig::default());
}

#[test]
fn malformed_block_is_config_error() {
    let err = FxConfig::from_json("{ not json").expect_err("should fail");
    assert!(matches!(err, FxError::Config(_)));
}

#[test]
fn wrong_field_type_is_config_error() {
    let err = FxConfig::from_json(r#"{ "rippleDurationMs": "slow" }"#).expect_err("should fail");
    assert!(matches!(err, FxError::Config(_)));
}

#[test]
fn smoothing_outside_unit_interval_is_rejected() {
    let err = FxConfig::from_json(r#"{ "cursorPrimarySmoothing": 0 }"#).expect_err("zero never converges");
    assert!(err.to_string().contains("cursorPrimarySmoothing"));
    assert!(FxConfig::from_json(r#"{ "cursorSecondarySmoothing": 1.5 }"#).is_err());
    assert!(FxConfig::from_json(r#"{ "cursorSecondarySmoothing": 1 }"#).is_ok());
}

#[test]
fn threshold_outside_unit_interval_is_rejected() {
    assert!(FxConfig::from_json(r#"{ "revealThreshold": -0.1 }"#).is_err());
    assert!(FxConfig::from_json(r#"{ "progressThreshold": 1.0 }"#).is_ok());
}
