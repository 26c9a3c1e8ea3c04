//! Tests for error types

use prometheus_request_queue::core::{QueueError, RequestError};

#[test]
fn test_invalid_capacity_error() {
    let err = QueueError::InvalidCapacity(0);
    assert_eq!(format!("{}", err), "invalid capacity 0: must be at least 1");
}

#[test]
fn test_invalid_config_error() {
    let err = QueueError::InvalidConfig("capacity must be greater than 0".to_string());
    assert_eq!(format!("{}", err), "invalid config: capacity must be greater than 0");
}

#[test]
fn test_runtime_error() {
    let err = QueueError::Runtime("no reactor".to_string());
    assert_eq!(format!("{}", err), "runtime unavailable: no reactor");
}

#[test]
fn test_transport_failure_is_carried_verbatim() {
    let err: RequestError<String> = RequestError::Transport("connection reset".to_string());
    assert_eq!(format!("{}", err), "transport failure: connection reset");
    assert_eq!(err.into_transport(), Some("connection reset".to_string()));
}

#[test]
fn test_abandoned_error() {
    let err: RequestError<String> = RequestError::Abandoned;
    assert_eq!(format!("{}", err), "request abandoned before completion");
    assert_eq!(err.into_transport(), None);
}
