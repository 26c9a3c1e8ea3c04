//! Runtime adapters and the public request API.

pub mod api;
#[cfg(feature = "tokio-runtime")]
pub mod tokio_spawner;

pub use api::{RequestQueue, ResponseFuture};
#[cfg(feature = "tokio-runtime")]
pub use tokio_spawner::TokioSpawner;
