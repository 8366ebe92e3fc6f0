//! Pluggable HTTP transport.

use std::borrow::Cow;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use crate::models::ApiError;
use crate::Result;

/// Anything able to execute an HTTP request and return a response.
///
/// The default implementation is [`reqwest::Client`]. Supply your own
/// through [`ClientConfig::with_transport`](crate::ClientConfig::with_transport)
/// to add proxies, recording, or canned responses in tests.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use reqwest::header::HeaderMap;
/// use reqwest::StatusCode;
/// use wildberries_rs::client::{Response, Transport};
///
/// struct AlwaysEmpty;
///
/// #[async_trait]
/// impl Transport for AlwaysEmpty {
///     async fn execute(&self, _request: reqwest::Request) -> wildberries_rs::Result<Response> {
///         Ok(Response::new(StatusCode::OK, HeaderMap::new(), Vec::new()))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and read the full response.
    async fn execute(&self, request: reqwest::Request) -> Result<Response>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn execute(&self, request: reqwest::Request) -> Result<Response> {
        let response = reqwest::Client::execute(self, request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(Response::new(status, headers, body.to_vec()))
    }
}

/// A fully read HTTP response.
///
/// Returned alongside every decoded payload, and carried inside
/// [`Error::Decode`](crate::Error::Decode), so the status and headers are
/// available whether or not the body decoded.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Response {
    /// Assemble a response from its parts.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw body bytes. Empty after the body was copied into a raw sink.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body as text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Try to read the body as the API's `{name, message}` error object.
    ///
    /// Decoding never looks at the status code, so this is opt-in for
    /// callers that want to explain a non-2xx answer.
    pub fn api_error(&self) -> Option<ApiError> {
        serde_json::from_slice(&self.body).ok()
    }

    pub(crate) fn take_body(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.body)
    }
}
