//! Response dispatch and decoding.
//!
//! Bodies are decoded as JSON first. The API does not always honour its own
//! content type, so anything that fails as JSON is retried as XML. An empty
//! body is a successful no-op and yields the destination's default value.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::Instrument;

use super::http::ClientInner;
use super::transport::Response;
use crate::models::records::with_xml_layout;
use crate::{Error, Result};

/// A decoded payload together with the response it came from.
#[derive(Debug, Clone)]
pub struct Reply<T> {
    /// The decoded payload
    pub data: T,
    /// Status, headers and raw body
    pub response: Response,
}

impl<T> Reply<T> {
    /// Discard the response and keep the payload.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Transform the payload, keeping the response.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reply<U> {
        Reply {
            data: f(self.data),
            response: self.response,
        }
    }
}

/// Decode a body, JSON first, XML second.
///
/// Returns `Ok(None)` for an empty (or whitespace-only) body and for a bare
/// JSON `null`. When both formats fail, the XML error is the one reported.
pub(crate) fn decode_body<T: DeserializeOwned>(
    body: &[u8],
    debug: bool,
) -> std::result::Result<Option<T>, quick_xml::DeError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        if debug {
            tracing::debug!("empty response body, nothing to decode");
        }
        return Ok(None);
    }
    if std::str::from_utf8(body).is_ok_and(|text| text.trim() == "null") {
        if debug {
            tracing::debug!("null response body, nothing to decode");
        }
        return Ok(None);
    }

    match serde_json::from_slice(body) {
        Ok(value) => Ok(Some(value)),
        Err(json_err) => {
            if debug {
                tracing::debug!(error = %json_err, "response is not JSON, trying XML");
            }
            with_xml_layout(|| quick_xml::de::from_reader(body)).map(Some)
        }
    }
}

impl ClientInner {
    /// Hand the request to the transport, honouring an optional deadline.
    ///
    /// Dropping the returned future cancels the in-flight attempt.
    pub(crate) async fn dispatch(
        &self,
        request: reqwest::Request,
        deadline: Option<Duration>,
    ) -> Result<Response> {
        let span = tracing::trace_span!(
            "wildberries_request",
            method = %request.method(),
            url = %request.url(),
        );
        let call = self.transport.execute(request).instrument(span);

        match deadline {
            Some(deadline) => tokio::time::timeout(deadline, call)
                .await
                .map_err(|_| Error::Timeout)?,
            None => call.await,
        }
    }

    /// Execute the request and decode the body into `T`.
    pub(crate) async fn execute<T: DeserializeOwned + Default>(
        &self,
        request: reqwest::Request,
        deadline: Option<Duration>,
    ) -> Result<Reply<T>> {
        let response = self.dispatch(request, deadline).await?;

        match decode_body::<T>(response.body(), self.config.debug) {
            Ok(data) => Ok(Reply {
                data: data.unwrap_or_default(),
                response,
            }),
            Err(source) => Err(Error::Decode {
                source,
                response: Box::new(response),
            }),
        }
    }

    /// Execute the request and copy the body verbatim into `sink`.
    pub(crate) async fn execute_raw<W>(
        &self,
        request: reqwest::Request,
        deadline: Option<Duration>,
        sink: &mut W,
    ) -> Result<Response>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let mut response = self.dispatch(request, deadline).await?;
        let body = response.take_body();
        sink.write_all(&body).await?;
        sink.flush().await?;
        Ok(response)
    }

    /// GET a fixed URL and decode the result.
    pub(crate) async fn get<T: DeserializeOwned + Default>(
        &self,
        url: &str,
        deadline: Option<Duration>,
    ) -> Result<Reply<T>> {
        let request = self.new_request(reqwest::Method::GET, url, None)?;
        self.execute(request, deadline).await
    }
}
