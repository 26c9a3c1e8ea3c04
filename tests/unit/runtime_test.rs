//! Tests for tokio spawner utilities

use prometheus_request_queue::core::{QueueError, Spawn};
use prometheus_request_queue::runtime::tokio_spawner::TokioSpawner;
use prometheus_request_queue::RequestQueue;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_spawned_futures_run_in_background() {
    let spawner = TokioSpawner::current().expect("inside a runtime");

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    for i in 0..4u32 {
        let tx = tx.clone();
        spawner.spawn(async move {
            tx.send(i * 10).unwrap();
        });
    }
    drop(tx);

    let mut seen = Vec::new();
    while let Some(value) = rx.recv().await {
        seen.push(value);
    }
    seen.sort_unstable();
    assert_eq!(seen, vec![0, 10, 20, 30]);
}

#[tokio::test]
async fn test_spawner_from_explicit_handle() {
    let spawner = TokioSpawner::new(tokio::runtime::Handle::current());
    let (tx, rx) = tokio::sync::oneshot::channel();
    spawner.spawn(async move {
        let _ = tx.send("done");
    });
    assert_eq!(rx.await.unwrap(), "done");
}

#[test]
fn test_current_outside_runtime_fails() {
    assert!(matches!(TokioSpawner::current(), Err(QueueError::Runtime(_))));
    assert!(RequestQueue::standard().is_err());
}

#[tokio::test]
async fn test_standard_queue_defaults() {
    let queue = RequestQueue::standard().unwrap();
    assert_eq!(queue.capacity(), 10);
    assert!(queue.snapshot().queued.is_empty());
}
