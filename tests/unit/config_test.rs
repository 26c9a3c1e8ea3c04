//! Tests for configuration validation

use prometheus_request_queue::config::{QueueConfig, DEFAULT_CAPACITY};

#[test]
fn test_default_capacity() {
    let config = QueueConfig::default();
    assert_eq!(config.capacity, DEFAULT_CAPACITY);
    assert_eq!(config.capacity, 10);
    assert!(config.validate().is_ok());
}

#[test]
fn test_zero_capacity_invalid() {
    let invalid = QueueConfig::with_capacity(0);
    assert!(invalid.validate().is_err());
}

#[test]
fn test_config_from_json() {
    let config = QueueConfig::from_json_str(r#"{ "capacity": 3 }"#).unwrap();
    assert_eq!(config.capacity, 3);
}

#[test]
fn test_config_from_json_uses_defaults() {
    let config = QueueConfig::from_json_str("{}").unwrap();
    assert_eq!(config, QueueConfig::default());
}

#[test]
fn test_config_from_json_rejects_zero_and_garbage() {
    assert!(QueueConfig::from_json_str(r#"{ "capacity": 0 }"#).is_err());
    assert!(QueueConfig::from_json_str(r#"{ "capacity": -1 }"#).is_err());

    let err = QueueConfig::from_json_str("not json").unwrap_err();
    assert!(err.starts_with("parse error"));
}
