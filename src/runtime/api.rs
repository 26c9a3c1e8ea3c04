//! Public submission API: one method per HTTP verb, all funnelled into the
//! same scheduler admission path.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::channel::oneshot;
use futures::FutureExt;
use parking_lot::Mutex;

use crate::core::{
    Method, QueueSnapshot, Request, RequestError, Scheduler, Spawn, Task, TaskId, Transport,
};

type Outcome<T> = Result<<T as Transport>::Response, <T as Transport>::Error>;
type Settle<T> = Arc<Mutex<Option<oneshot::Sender<Outcome<T>>>>>;

/// Handle to a submitted request. Resolves exactly once.
///
/// Dropping the handle does not withdraw the request; it still runs when
/// capacity allows and its outcome is discarded.
#[must_use = "the request runs regardless; await the handle to observe its outcome"]
pub struct ResponseFuture<T: Transport> {
    task_id: TaskId,
    rx: oneshot::Receiver<Outcome<T>>,
}

impl<T: Transport> ResponseFuture<T> {
    /// Identifier of the underlying task.
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }
}

impl<T: Transport> Future for ResponseFuture<T> {
    type Output = Result<T::Response, RequestError<T::Error>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.rx.poll_unpin(cx).map(|received| match received {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(err)) => Err(RequestError::Transport(err)),
            Err(oneshot::Canceled) => Err(RequestError::Abandoned),
        })
    }
}

fn settle<T: Transport>(slot: &Settle<T>, outcome: Outcome<T>) {
    if let Some(tx) = slot.lock().take() {
        // receiver gone means the caller stopped listening
        let _ = tx.send(outcome);
    }
}

/// Request queue admitting at most `capacity` concurrent requests.
///
/// ```rust,ignore
/// use prometheus_request_queue::RequestQueue;
///
/// let queue = RequestQueue::standard()?;
/// let users = queue.get("https://api.example.com/users", None).await?;
/// let created = queue
///     .post("https://api.example.com/users", Some(serde_json::json!({"name": "ada"})), None)
///     .await?;
/// ```
pub struct RequestQueue<T: Transport, S> {
    scheduler: Scheduler<T, S>,
}

impl<T: Transport, S> Clone for RequestQueue<T, S> {
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
        }
    }
}

impl<T: Transport, S> RequestQueue<T, S> {
    /// Wrap an existing scheduler.
    pub const fn from_scheduler(scheduler: Scheduler<T, S>) -> Self {
        Self { scheduler }
    }

    /// Underlying scheduler.
    pub const fn scheduler(&self) -> &Scheduler<T, S> {
        &self.scheduler
    }

    /// Maximum concurrent requests.
    pub fn capacity(&self) -> usize {
        self.scheduler.capacity()
    }

    /// Current queue contents.
    pub fn snapshot(&self) -> QueueSnapshot {
        self.scheduler.snapshot()
    }
}

impl<T, S> RequestQueue<T, S>
where
    T: Transport,
    S: Spawn + Send + Sync + 'static,
{
    /// Submit an arbitrary request.
    pub fn request(&self, request: Request<T::Config>) -> ResponseFuture<T> {
        let (tx, rx) = oneshot::channel();
        let on_success: Settle<T> = Arc::new(Mutex::new(Some(tx)));
        let on_failure = Arc::clone(&on_success);

        let task = Task::new(
            request,
            move |response| settle::<T>(&on_success, Ok(response)),
            move |err| settle::<T>(&on_failure, Err(err)),
        );
        let task_id = self.scheduler.submit(task);
        ResponseFuture { task_id, rx }
    }

    fn submit(
        &self,
        method: Method,
        endpoint: impl Into<String>,
        body: Option<serde_json::Value>,
        config: Option<T::Config>,
    ) -> ResponseFuture<T> {
        self.request(Request {
            method,
            endpoint: endpoint.into(),
            body,
            config,
        })
    }

    /// Queue a `GET`.
    pub fn get(&self, endpoint: impl Into<String>, config: Option<T::Config>) -> ResponseFuture<T> {
        self.submit(Method::Get, endpoint, None, config)
    }

    /// Queue a `DELETE`.
    pub fn delete(
        &self,
        endpoint: impl Into<String>,
        config: Option<T::Config>,
    ) -> ResponseFuture<T> {
        self.submit(Method::Delete, endpoint, None, config)
    }

    /// Queue a `POST`.
    pub fn post(
        &self,
        endpoint: impl Into<String>,
        body: Option<serde_json::Value>,
        config: Option<T::Config>,
    ) -> ResponseFuture<T> {
        self.submit(Method::Post, endpoint, body, config)
    }

    /// Queue a `PATCH`.
    pub fn patch(
        &self,
        endpoint: impl Into<String>,
        body: Option<serde_json::Value>,
        config: Option<T::Config>,
    ) -> ResponseFuture<T> {
        self.submit(Method::Patch, endpoint, body, config)
    }

    /// Queue a `PUT`.
    pub fn put(
        &self,
        endpoint: impl Into<String>,
        body: Option<serde_json::Value>,
        config: Option<T::Config>,
    ) -> ResponseFuture<T> {
        self.submit(Method::Put, endpoint, body, config)
    }
}

#[cfg(all(feature = "http", feature = "tokio-runtime"))]
impl RequestQueue<crate::infra::http::HttpTransport, crate::runtime::TokioSpawner> {
    /// Queue with the standard HTTP transport and default capacity, driven by
    /// the current tokio runtime.
    pub fn standard() -> Result<Self, crate::core::QueueError> {
        crate::builders::RequestQueueBuilder::standard()?.build()
    }
}
