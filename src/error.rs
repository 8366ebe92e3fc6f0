//! Error types for the Wildberries API client.
//!
//! Every failure is returned to the immediate caller. The only condition
//! that is deliberately swallowed is an empty response body, which decodes
//! to the destination's default value.

use thiserror::Error;

use crate::client::Response;

/// A specialized `Result` type for Wildberries operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Wildberries API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The endpoint string could not be parsed as a URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request body or a header value could not be encoded
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The transport failed to deliver the request or read the response
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The body was read but was neither valid JSON nor valid XML for the
    /// requested shape.
    ///
    /// The response is kept so that its status and headers can still be
    /// inspected.
    #[error("Decode error (HTTP {}): {source}", .response.status())]
    Decode {
        /// The XML error from the fallback attempt
        #[source]
        source: quick_xml::DeError,
        /// The response whose body failed to decode
        response: Box<Response>,
    },

    /// The caller-supplied deadline elapsed before the transport returned
    #[error("Request timeout")]
    Timeout,

    /// Writing the raw body into a caller-supplied sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The client could not be constructed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if the request never produced a response.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Timeout)
    }

    /// Returns `true` if a response arrived but its body could not be decoded.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    /// The response carried by a decode failure, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use wildberries_rs::Error;
    ///
    /// fn report(err: &Error) {
    ///     if let Some(response) = err.response() {
    ///         eprintln!("server answered {}", response.status());
    ///     }
    /// }
    /// ```
    pub fn response(&self) -> Option<&Response> {
        match self {
            Error::Decode { response, .. } => Some(response),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else {
            Error::Transport(Box::new(err))
        }
    }
}
