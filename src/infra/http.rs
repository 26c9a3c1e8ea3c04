//! Standard HTTP transport backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::core::{Method, Request, Transport};

/// Per-request options understood by [`HttpTransport`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpOptions {
    /// Base URL for relative endpoints; overrides the transport's own base.
    pub base_url: Option<String>,
    /// Extra request headers.
    pub headers: Vec<(String, String)>,
    /// Query string parameters.
    pub query: Vec<(String, String)>,
    /// Give up after this long; surfaces as [`HttpError::Request`].
    pub timeout: Option<Duration>,
}

impl HttpOptions {
    /// Add a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add a query parameter.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Set a timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Response collected from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Response headers with lower-case names. Repeated headers appear once
    /// per occurrence, in arrival order; non-UTF-8 values are skipped.
    pub headers: Vec<(String, String)>,
    /// Raw body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// First value of header `name`, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_values(name).next()
    }

    /// Every value of header `name`, in arrival order.
    pub fn header_values<'a, 'n>(&'a self, name: &'n str) -> impl Iterator<Item = &'a str> + use<'a, 'n> {
        self.headers
            .iter()
            .filter(move |(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Decode the body as JSON.
    pub fn json<D: DeserializeOwned>(&self) -> Result<D, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Failures reported by [`HttpTransport`].
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The server answered outside the 2xx range.
    #[error("server responded with status {status}")]
    Status {
        /// Status code.
        status: u16,
        /// Full response.
        response: HttpResponse,
    },
}

impl HttpError {
    /// Status code, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request(err) => err.status().map(|s| s.as_u16()),
            Self::Status { status, .. } => Some(*status),
        }
    }
}

/// Transport that performs requests with a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl HttpTransport {
    /// Transport over an existing client.
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: None,
        }
    }

    /// Resolve relative endpoints against `base_url`.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Absolute URL for `endpoint`. Per-request base wins over the transport's.
    pub fn resolve_url(&self, endpoint: &str, options: Option<&HttpOptions>) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.to_owned();
        }
        let base = options
            .and_then(|o| o.base_url.as_deref())
            .or(self.base_url.as_deref());
        match base {
            Some(base) => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                endpoint.trim_start_matches('/')
            ),
            None => endpoint.to_owned(),
        }
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Delete => reqwest::Method::DELETE,
        Method::Post => reqwest::Method::POST,
        Method::Patch => reqwest::Method::PATCH,
        Method::Put => reqwest::Method::PUT,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    type Config = HttpOptions;
    type Response = HttpResponse;
    type Error = HttpError;

    async fn perform(&self, request: Request<HttpOptions>) -> Result<HttpResponse, HttpError> {
        let options = request.config.unwrap_or_default();
        let url = self.resolve_url(&request.endpoint, Some(&options));

        let mut builder = self.client.request(to_reqwest(request.method), &url);
        for (name, value) in &options.headers {
            builder = builder.header(name, value);
        }
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_owned(), v.to_owned()))
            })
            .collect();
        let body = response.bytes().await?.to_vec();
        let response = HttpResponse {
            status,
            headers,
            body,
        };

        tracing::debug!(%url, status, "http response received");
        if (200..300).contains(&status) {
            Ok(response)
        } else {
            Err(HttpError::Status { status, response })
        }
    }
}
