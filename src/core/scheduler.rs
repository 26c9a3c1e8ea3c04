//! Bounded-concurrency scheduler: admission queue, in-flight set, refill loop.

use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::{
    AdmissionQueue, EventKind, EventSink, InFlightSet, QueueError, SchedulerEvent, Task, TaskId,
    TaskSummary, Transport,
};

/// Abstraction for spawning dispatch futures on a runtime.
///
/// A spawner may poll the future inline before returning; the scheduler never
/// holds its state lock while calling `spawn`. Dropping a future instead of
/// running it releases its slot and the request settles as abandoned.
pub trait Spawn {
    /// Spawn a future that runs to completion in the background.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

/// Point-in-time view of a scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueSnapshot {
    /// Maximum in-flight tasks.
    pub capacity: usize,
    /// Waiting tasks, oldest first.
    pub queued: Vec<TaskSummary>,
    /// Occupied slots, in claim order.
    pub in_flight: Vec<TaskSummary>,
}

impl QueueSnapshot {
    /// Endpoints of waiting tasks, oldest first.
    pub fn queued_endpoints(&self) -> Vec<&str> {
        self.queued.iter().map(|s| s.endpoint.as_str()).collect()
    }

    /// Endpoints of in-flight tasks, in claim order.
    pub fn in_flight_endpoints(&self) -> Vec<&str> {
        self.in_flight.iter().map(|s| s.endpoint.as_str()).collect()
    }
}

/// Mutable queue state; only ever touched under `Shared::state`.
struct QueueState<T: Transport> {
    admission: AdmissionQueue<T>,
    in_flight: InFlightSet<T>,
}

impl<T: Transport> QueueState<T> {
    const fn new() -> Self {
        Self {
            admission: AdmissionQueue::new(),
            in_flight: InFlightSet::new(),
        }
    }

    /// Move as many queued tasks as fit into the in-flight set.
    /// Returns how many were claimed.
    fn claim(&mut self, capacity: usize) -> usize {
        let free = capacity.saturating_sub(self.in_flight.len());
        if free == 0 || self.admission.is_empty() {
            return 0;
        }
        let claimed = self.admission.take_up_to(free);
        let n = claimed.len();
        self.in_flight.admit(claimed);
        n
    }
}

struct Shared<T: Transport, S> {
    capacity: usize,
    transport: Arc<T>,
    spawner: S,
    state: Mutex<QueueState<T>>,
    events: Option<Arc<dyn EventSink>>,
}

/// Releases queued requests to a transport, never more than `capacity` at once.
///
/// Cloning a `Scheduler` yields another handle onto the same queue state.
/// Separately constructed schedulers share nothing.
///
/// Submitted tasks cannot be withdrawn: there is no cancellation, and a task
/// stays queued until capacity frees up for it.
pub struct Scheduler<T: Transport, S> {
    inner: Arc<Shared<T, S>>,
}

impl<T: Transport, S> Clone for Scheduler<T, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Transport, S> Scheduler<T, S> {
    /// Create a scheduler. Fails if `capacity` is zero.
    pub fn new(transport: T, capacity: usize, spawner: S) -> Result<Self, QueueError> {
        Self::from_parts(Arc::new(transport), capacity, spawner, None)
    }

    pub(crate) fn from_parts(
        transport: Arc<T>,
        capacity: usize,
        spawner: S,
        events: Option<Arc<dyn EventSink>>,
    ) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::InvalidCapacity(capacity));
        }
        Ok(Self {
            inner: Arc::new(Shared {
                capacity,
                transport,
                spawner,
                state: Mutex::new(QueueState::new()),
                events,
            }),
        })
    }

    /// Maximum number of in-flight tasks.
    pub fn capacity(&self) -> usize {
        self.inner.capacity
    }

    /// Shared transport.
    pub fn transport(&self) -> &T {
        &self.inner.transport
    }

    /// Number of tasks waiting for capacity.
    pub fn queued_len(&self) -> usize {
        self.inner.state.lock().admission.len()
    }

    /// Number of occupied slots.
    pub fn in_flight_len(&self) -> usize {
        self.inner.state.lock().in_flight.len()
    }

    /// Consistent view of both queues.
    pub fn snapshot(&self) -> QueueSnapshot {
        let state = self.inner.state.lock();
        QueueSnapshot {
            capacity: self.inner.capacity,
            queued: state
                .admission
                .iter()
                .map(|task| TaskSummary::of(task, false))
                .collect(),
            in_flight: state.in_flight.summaries(),
        }
    }

    /// Append a task to the admission queue without dispatching anything.
    pub fn enqueue(&self, task: Task<T>) -> TaskId {
        let id = task.id();
        let event = self.inner.events.as_ref().map(|_| {
            let request = task.request();
            SchedulerEvent::now(id, request.method, request.endpoint.clone(), EventKind::Enqueued)
        });

        let queued = {
            let mut state = self.inner.state.lock();
            state.admission.enqueue(task);
            state.admission.len()
        };
        tracing::debug!(task_id = %id, queued, "task enqueued");

        if let (Some(sink), Some(event)) = (self.inner.events.as_ref(), event) {
            sink.record(event);
        }
        id
    }

    fn record(&self, summary: &TaskSummary, kind: EventKind) {
        if let Some(sink) = self.inner.events.as_ref() {
            sink.record(SchedulerEvent::now(
                summary.id,
                summary.method,
                summary.endpoint.clone(),
                kind,
            ));
        }
    }
}

impl<T, S> Scheduler<T, S>
where
    T: Transport,
    S: Spawn + Send + Sync + 'static,
{
    /// Enqueue a task and immediately try to dispatch.
    pub fn submit(&self, task: Task<T>) -> TaskId {
        let id = self.enqueue(task);
        self.refill();
        id
    }

    /// Claim queued tasks into free capacity and dispatch every claimed task
    /// that has not been dispatched yet.
    ///
    /// Safe to call at any time, including re-entrantly from a completion.
    pub fn refill(&self) {
        let batch = {
            let mut state = self.inner.state.lock();
            let claimed = state.claim(self.inner.capacity);
            if claimed == 0 {
                return;
            }
            tracing::debug!(
                claimed,
                in_flight = state.in_flight.len(),
                queued = state.admission.len(),
                "claimed queued tasks"
            );
            state.in_flight.take_undispatched()
        };

        // Record the whole batch first: an inline spawner may complete a task
        // and re-enter refill before the rest of the batch is spawned, so
        // `Dispatched` events follow claim order, not transport call order.
        for task in &batch {
            self.record(&TaskSummary::of(task, true), EventKind::Dispatched);
        }
        for task in batch {
            self.dispatch(task);
        }
    }

    fn dispatch(&self, task: Task<T>) {
        tracing::info!(
            task_id = %task.id(),
            method = %task.request().method,
            endpoint = %task.request().endpoint,
            "dispatching request"
        );

        let scheduler = self.clone();
        let transport = Arc::clone(&self.inner.transport);
        self.inner
            .spawner
            .spawn(task.dispatch(transport, move |id| scheduler.complete(id)));
    }

    fn complete(&self, id: TaskId) {
        let removed = self.inner.state.lock().in_flight.remove(id);
        match removed {
            Some(summary) => {
                tracing::info!(task_id = %id, endpoint = %summary.endpoint, "request completed");
                self.record(&summary, EventKind::Completed);
            }
            None => tracing::warn!(task_id = %id, "completion for untracked task"),
        }
        self.refill();
    }
}
