//! Configuration models for request queues.

pub mod queue;

pub use queue::{QueueConfig, CAPACITY_ENV, DEFAULT_CAPACITY};
