//! Request tasks: one queued unit of outbound work and its callbacks.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Transport;

/// Identifier of a task tracked by a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Request method understood by the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// `GET`
    Get,
    /// `DELETE`
    Delete,
    /// `POST`
    Post,
    /// `PATCH`
    Patch,
    /// `PUT`
    Put,
}

impl Method {
    /// Upper-case wire name of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Delete => "DELETE",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
        }
    }

    /// Whether the submission API accepts a body for this method.
    #[must_use]
    pub const fn accepts_body(self) -> bool {
        matches!(self, Self::Post | Self::Patch | Self::Put)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of one outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct Request<C> {
    /// Request method.
    pub method: Method,
    /// Target endpoint, absolute or relative to the transport's base.
    pub endpoint: String,
    /// Optional JSON body.
    pub body: Option<serde_json::Value>,
    /// Optional transport-defined options.
    pub config: Option<C>,
}

impl<C> Request<C> {
    /// Request without body or options.
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            body: None,
            config: None,
        }
    }

    /// Attach a body.
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach transport options.
    #[must_use]
    pub fn with_config(mut self, config: C) -> Self {
        self.config = Some(config);
        self
    }
}

type SuccessCallback<R> = Box<dyn FnOnce(R) + Send + 'static>;
type FailureCallback<E> = Box<dyn FnOnce(E) + Send + 'static>;

/// A request plus the callbacks that receive its outcome.
///
/// Tasks are immutable once built. The only thing to do with one is
/// [`Task::dispatch`] it, which consumes it.
pub struct Task<T: Transport> {
    id: TaskId,
    request: Request<T::Config>,
    on_success: SuccessCallback<T::Response>,
    on_failure: FailureCallback<T::Error>,
}

impl<T: Transport> Task<T> {
    /// Build a task with a freshly generated identifier.
    pub fn new<S, F>(request: Request<T::Config>, on_success: S, on_failure: F) -> Self
    where
        S: FnOnce(T::Response) + Send + 'static,
        F: FnOnce(T::Error) + Send + 'static,
    {
        Self {
            id: TaskId::new(),
            request,
            on_success: Box::new(on_success),
            on_failure: Box::new(on_failure),
        }
    }

    /// Identifier of this task.
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Request parameters.
    pub const fn request(&self) -> &Request<T::Config> {
        &self.request
    }

    /// Run the request through `transport`.
    ///
    /// The outcome goes to exactly one of the success/failure callbacks, then
    /// `on_complete` runs once with this task's id. `on_complete` still runs
    /// exactly once if the returned future is dropped, unpolled or mid-flight,
    /// or the transport panics; the callbacks are then dropped uncalled.
    pub fn dispatch<F>(self, transport: Arc<T>, on_complete: F) -> impl Future<Output = ()>
    where
        F: FnOnce(TaskId),
    {
        let Self {
            id,
            request,
            on_success,
            on_failure,
        } = self;
        let guard = CompletionGuard::new(move || on_complete(id));

        async move {
            let _guard = guard;
            match transport.perform(request).await {
                Ok(response) => on_success(response),
                Err(err) => on_failure(err),
            }
        }
    }
}

/// Runs its callback once, when dropped.
struct CompletionGuard<F: FnOnce()> {
    on_drop: Option<F>,
}

impl<F: FnOnce()> CompletionGuard<F> {
    fn new(on_drop: F) -> Self {
        Self {
            on_drop: Some(on_drop),
        }
    }
}

impl<F: FnOnce()> Drop for CompletionGuard<F> {
    fn drop(&mut self) {
        if let Some(on_drop) = self.on_drop.take() {
            on_drop();
        }
    }
}

impl<T: Transport> fmt::Debug for Task<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("id", &self.id)
            .field("method", &self.request.method)
            .field("endpoint", &self.request.endpoint)
            .finish_non_exhaustive()
    }
}
