//! Transport abstraction the scheduler dispatches requests through.

use async_trait::async_trait;

use super::Request;

/// Capability that performs a single outbound request.
///
/// The scheduler treats every transport as opaque: it hands over a
/// [`Request`] and forwards whatever comes back to the caller untouched.
/// Implementations must tolerate as many concurrent `perform` calls as the
/// queue's capacity.
///
/// # Example
///
/// ```rust,ignore
/// use async_trait::async_trait;
/// use prometheus_request_queue::core::{Request, Transport};
///
/// #[derive(Default)]
/// struct EchoTransport;
///
/// #[async_trait]
/// impl Transport for EchoTransport {
///     type Config = ();
///     type Response = String;
///     type Error = String;
///
///     async fn perform(&self, request: Request<()>) -> Result<String, String> {
///         Ok(format!("{} {}", request.method, request.endpoint))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Per-request options, passed through unmodified.
    type Config: Send + 'static;
    /// Value produced for a successful request.
    type Response: Send + 'static;
    /// Value produced for a failed request.
    type Error: Send + 'static;

    /// Perform the request and report its outcome.
    async fn perform(&self, request: Request<Self::Config>) -> Result<Self::Response, Self::Error>;
}
