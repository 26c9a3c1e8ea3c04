//! Tests for builder modules

use async_trait::async_trait;
use prometheus_request_queue::builders::RequestQueueBuilder;
use prometheus_request_queue::config::QueueConfig;
use prometheus_request_queue::core::{QueueError, Request, Scheduler, Spawn, Transport};
use std::future::Future;

struct NullTransport;

#[async_trait]
impl Transport for NullTransport {
    type Config = ();
    type Response = ();
    type Error = ();

    async fn perform(&self, _request: Request<()>) -> Result<(), ()> {
        Ok(())
    }
}

struct IdleSpawner;

impl Spawn for IdleSpawner {
    fn spawn<F>(&self, _fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
    }
}

#[test]
fn test_builder_defaults() {
    let builder = RequestQueueBuilder::new(NullTransport, IdleSpawner);
    assert_eq!(builder.current_config().capacity, 10);

    let queue = builder.build().unwrap();
    assert_eq!(queue.capacity(), 10);
}

#[test]
fn test_builder_capacity_override() {
    let queue = RequestQueueBuilder::new(NullTransport, IdleSpawner)
        .config(QueueConfig::with_capacity(7))
        .capacity(3)
        .build()
        .unwrap();
    assert_eq!(queue.capacity(), 3);
}

#[test]
fn test_builder_rejects_zero_capacity() {
    let via_setter = RequestQueueBuilder::new(NullTransport, IdleSpawner)
        .capacity(0)
        .build();
    assert!(matches!(via_setter, Err(QueueError::InvalidConfig(_))));

    let via_config = RequestQueueBuilder::new(NullTransport, IdleSpawner)
        .config(QueueConfig::with_capacity(0))
        .build();
    assert!(matches!(via_config, Err(QueueError::InvalidConfig(_))));
}

#[test]
fn test_scheduler_rejects_zero_capacity() {
    let result = Scheduler::new(NullTransport, 0, IdleSpawner);
    assert!(matches!(result, Err(QueueError::InvalidCapacity(0))));
}
