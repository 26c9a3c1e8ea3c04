//! Tests for scheduler lifecycle events

use async_trait::async_trait;
use prometheus_request_queue::builders::RequestQueueBuilder;
use prometheus_request_queue::core::{
    EventKind, InMemoryEventSink, Request, Spawn, Transport,
};
use std::future::Future;
use std::sync::Arc;

struct EchoTransport;

#[async_trait]
impl Transport for EchoTransport {
    type Config = ();
    type Response = String;
    type Error = String;

    async fn perform(&self, request: Request<()>) -> Result<String, String> {
        Ok(request.endpoint)
    }
}

/// Polls every dispatch to completion before returning.
struct BlockingSpawner;

impl Spawn for BlockingSpawner {
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        futures::executor::block_on(fut);
    }
}

#[test]
fn test_each_task_emits_full_lifecycle() {
    let sink = InMemoryEventSink::new(32);
    let queue = RequestQueueBuilder::new(EchoTransport, BlockingSpawner)
        .capacity(1)
        .event_sink(Arc::new(sink.clone()))
        .build()
        .unwrap();

    let first = queue.get("/one", None);
    let second = queue.delete("/two", None);

    assert_eq!(futures::executor::block_on(first).unwrap(), "/one");
    assert_eq!(futures::executor::block_on(second).unwrap(), "/two");

    let kinds: Vec<(String, EventKind)> = sink
        .events()
        .into_iter()
        .map(|e| (e.endpoint, e.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("/one".to_string(), EventKind::Enqueued),
            ("/one".to_string(), EventKind::Dispatched),
            ("/one".to_string(), EventKind::Completed),
            ("/two".to_string(), EventKind::Enqueued),
            ("/two".to_string(), EventKind::Dispatched),
            ("/two".to_string(), EventKind::Completed),
        ]
    );
}
