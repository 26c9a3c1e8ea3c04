//! # Prometheus Request Queue
//!
//! A bounded-concurrency admission queue for outbound requests.
//!
//! Callers submit an unbounded stream of requests; the queue releases them to a
//! transport so that no more than `capacity` are in flight at once. Every
//! completion, successful or not, frees its slot and pulls the oldest waiting
//! request forward.
//!
//! ## Key Features
//!
//! - **Strict FIFO admission**: requests are dispatched in submission order
//! - **Completion-driven refill**: no polling; a finished request triggers the next
//! - **Opaque transport**: plug in any [`core::Transport`]; the standard one is
//!   an HTTP client built on `reqwest`
//! - **Single-settlement handles**: every `get`/`post`/... returns a future that
//!   resolves exactly once with the transport's response or error
//! - **Independent instances**: each queue owns its state; nothing is global
//!
//! ## Limitations
//!
//! Submitted requests cannot be cancelled, and the queue applies no timeout of
//! its own. Timeouts belong to the transport and surface as failures.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use prometheus_request_queue::builders::RequestQueueBuilder;
//! use prometheus_request_queue::infra::{HttpOptions, HttpTransport};
//! use prometheus_request_queue::runtime::TokioSpawner;
//! use std::time::Duration;
//!
//! let queue = RequestQueueBuilder::new(
//!     HttpTransport::default().with_base_url("https://api.example.com"),
//!     TokioSpawner::current()?,
//! )
//! .capacity(4)
//! .build()?;
//!
//! let options = HttpOptions::default().timeout(Duration::from_secs(5));
//! let user = queue.get("/users/1", Some(options)).await?;
//! ```
//!
//! For complete examples, see `tests/admission_algorithm_test.rs`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling abstractions: tasks, queues, transport and scheduler.
pub mod core;
/// Configuration models for request queues.
pub mod config;
/// Builders to construct request queues from configuration.
pub mod builders;
/// Infrastructure adapters for concrete transports.
pub mod infra;
/// Runtime adapters and the public submission API.
pub mod runtime;
/// Shared utilities.
pub mod util;

pub use crate::core::{QueueError, RequestError};
pub use crate::runtime::{RequestQueue, ResponseFuture};
