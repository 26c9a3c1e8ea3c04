//! Infrastructure adapters: concrete transports.

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::{HttpError, HttpOptions, HttpResponse, HttpTransport};
