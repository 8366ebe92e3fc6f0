//! Request construction.

use std::collections::BTreeMap;

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use secrecy::ExposeSecret;
use serde::Serialize;
use url::Url;

use super::http::ClientInner;
use crate::{Error, Result};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Payload attached to a request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Sent as `application/x-www-form-urlencoded`
    Form(FormValues),
    /// Sent as a JSON document
    Json(serde_json::Value),
}

impl RequestBody {
    /// Serialize any value into a JSON body.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        serde_json::to_value(value)
            .map(RequestBody::Json)
            .map_err(|e| Error::Encoding(e.to_string()))
    }

    fn encode(&self) -> Result<String> {
        match self {
            RequestBody::Form(values) => Ok(values.encode()),
            RequestBody::Json(value) => {
                serde_json::to_string(value).map_err(|e| Error::Encoding(e.to_string()))
            }
        }
    }
}

impl From<FormValues> for RequestBody {
    fn from(values: FormValues) -> Self {
        RequestBody::Form(values)
    }
}

impl From<serde_json::Value> for RequestBody {
    fn from(value: serde_json::Value) -> Self {
        RequestBody::Json(value)
    }
}

/// Form fields, each key holding one or more values.
///
/// Keys are kept sorted so the encoded form is deterministic.
///
/// # Example
///
/// ```
/// use wildberries_rs::client::FormValues;
///
/// let mut form = FormValues::new();
/// form.add("dateFrom", "2024-01-01");
/// form.add("flag", "0");
/// assert_eq!(form.encode(), "dateFrom=2024-01-01&flag=0");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, Vec<String>>);

impl FormValues {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to a key.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    /// Replace all values of a key with a single value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), vec![value.into()]);
    }

    /// First value of a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.first()).map(String::as_str)
    }

    /// All values of a key.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether the form has no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode as `key=value&...` in key order.
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, values) in &self.0 {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = FormValues::new();
        for (key, value) in iter {
            form.add(key, value);
        }
        form
    }
}

impl ClientInner {
    /// Build an authorized request.
    ///
    /// The `Authorization` header always carries the configured token as
    /// is, even when it is empty. No timeout is attached here.
    pub(crate) fn new_request(
        &self,
        method: Method,
        url: &str,
        body: Option<RequestBody>,
    ) -> Result<reqwest::Request> {
        let url = Url::parse(url)?;

        let is_form = matches!(body, Some(RequestBody::Form(_)));
        let payload = body.as_ref().map(RequestBody::encode).transpose()?;

        let mut request = reqwest::Request::new(method, url);
        if let Some(payload) = payload {
            *request.body_mut() = Some(payload.into());
        }

        let token = HeaderValue::from_str(self.config.access_token.expose_secret())
            .map_err(|_| Error::Encoding("access token is not a valid header value".to_string()))?;
        let user_agent = HeaderValue::from_str(&self.config.user_agent)
            .map_err(|_| Error::Encoding("user agent is not a valid header value".to_string()))?;

        let headers = request.headers_mut();
        headers.insert(AUTHORIZATION, token);
        headers.insert(USER_AGENT, user_agent);
        if is_form && request.method() == Method::POST {
            request
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        }

        Ok(request)
    }
}
