//! Builder wiring a transport, a spawner and a config into a [`RequestQueue`].

use std::sync::Arc;

use crate::config::QueueConfig;
use crate::core::{EventSink, QueueError, Scheduler, Spawn, Transport};
use crate::runtime::RequestQueue;

/// Builder for [`RequestQueue`].
///
/// ```rust,ignore
/// let queue = RequestQueueBuilder::new(HttpTransport::default(), TokioSpawner::current()?)
///     .capacity(4)
///     .build()?;
/// ```
pub struct RequestQueueBuilder<T, S> {
    transport: T,
    spawner: S,
    config: QueueConfig,
    events: Option<Arc<dyn EventSink>>,
}

impl<T, S> RequestQueueBuilder<T, S>
where
    T: Transport,
    S: Spawn + Send + Sync + 'static,
{
    /// Start from a transport and spawner with the default config.
    pub fn new(transport: T, spawner: S) -> Self {
        Self {
            transport,
            spawner,
            config: QueueConfig::default(),
            events: None,
        }
    }

    /// Replace the whole config.
    #[must_use]
    pub fn config(mut self, config: QueueConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the capacity.
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Send lifecycle events to `sink`.
    #[must_use]
    pub fn event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.events = Some(sink);
        self
    }

    /// Config the queue will be built with.
    pub const fn current_config(&self) -> &QueueConfig {
        &self.config
    }

    /// Validate the config and build the queue.
    pub fn build(self) -> Result<RequestQueue<T, S>, QueueError> {
        self.config.validate().map_err(QueueError::InvalidConfig)?;
        let scheduler = Scheduler::from_parts(
            Arc::new(self.transport),
            self.config.capacity,
            self.spawner,
            self.events,
        )?;
        tracing::debug!(capacity = self.config.capacity, "request queue built");
        Ok(RequestQueue::from_scheduler(scheduler))
    }
}

#[cfg(all(feature = "http", feature = "tokio-runtime"))]
impl RequestQueueBuilder<crate::infra::http::HttpTransport, crate::runtime::TokioSpawner> {
    /// Builder with the standard HTTP transport on the current tokio runtime.
    pub fn standard() -> Result<Self, QueueError> {
        let spawner = crate::runtime::TokioSpawner::current()?;
        Ok(Self::new(crate::infra::http::HttpTransport::default(), spawner))
    }
}
