//! Scheduler lifecycle events.
//!
//! Every task produces, in order, one `Enqueued`, one `Dispatched` and one
//! `Completed` event. Sinks are optional; a scheduler without one only logs.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::{Method, TaskId};
use crate::util::clock::now_ms;

/// What happened to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Appended to the admission queue.
    Enqueued,
    /// Claimed into a free slot and scheduled for the transport.
    ///
    /// Recorded in claim order. With a spawner that runs futures inline, a
    /// later claim can reach the transport before an earlier one from the
    /// same batch.
    Dispatched,
    /// Transport reported back; the slot is free.
    Completed,
}

/// A single lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerEvent {
    /// Task the event refers to.
    pub task_id: TaskId,
    /// Request method of the task.
    pub method: Method,
    /// Target endpoint of the task.
    pub endpoint: String,
    /// Event kind.
    pub kind: EventKind,
    /// Milliseconds since epoch.
    pub at_ms: u128,
}

impl SchedulerEvent {
    /// Build an event stamped with the current time.
    pub fn now(task_id: TaskId, method: Method, endpoint: impl Into<String>, kind: EventKind) -> Self {
        Self {
            task_id,
            method,
            endpoint: endpoint.into(),
            kind,
            at_ms: now_ms(),
        }
    }
}

/// Receiver of scheduler events.
///
/// Called outside the scheduler's state lock, possibly from several threads.
pub trait EventSink: Send + Sync {
    /// Record an event.
    fn record(&self, event: SchedulerEvent);
}

/// Bounded in-memory sink for tests and development.
///
/// Cloning yields another handle onto the same buffer, so a test can keep
/// one clone and give the other to the scheduler.
#[derive(Clone)]
pub struct InMemoryEventSink {
    events: Arc<Mutex<VecDeque<SchedulerEvent>>>,
    max_events: usize,
}

impl InMemoryEventSink {
    /// Create a sink that keeps the most recent `max_events` events.
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::with_capacity(max_events.min(1024)))),
            max_events,
        }
    }

    /// Snapshot of stored events, oldest first.
    pub fn events(&self) -> Vec<SchedulerEvent> {
        self.events.lock().iter().cloned().collect()
    }

    /// Endpoints of stored events of one kind, oldest first.
    pub fn endpoints(&self, kind: EventKind) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.endpoint.clone())
            .collect()
    }
}

impl EventSink for InMemoryEventSink {
    fn record(&self, event: SchedulerEvent) {
        if self.max_events == 0 {
            return;
        }
        let mut events = self.events.lock();
        if events.len() >= self.max_events {
            events.pop_front();
        }
        events.push_back(event);
    }
}
