//! Core scheduling abstractions: tasks, queues, transport and the refill loop.

pub mod admission;
pub mod error;
pub mod events;
pub mod in_flight;
pub mod scheduler;
pub mod task;
pub mod transport;

pub use admission::AdmissionQueue;
pub use error::{AppResult, QueueError, RequestError};
pub use events::{EventKind, EventSink, InMemoryEventSink, SchedulerEvent};
pub use in_flight::{InFlightSet, TaskSummary};
pub use scheduler::{QueueSnapshot, Scheduler, Spawn};
pub use task::{Method, Request, Task, TaskId};
pub use transport::Transport;
