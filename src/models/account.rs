//! Seller account and general response models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Seller profile returned by the seller-info endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SellerInfo {
    /// Legal name
    pub name: String,
    /// Seller id
    pub sid: String,
    /// Trade mark
    pub trade_mark: String,
}

/// Request metadata some endpoints attach to their responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvocationInfo {
    /// Host that served the request
    pub hostname: String,
    /// Request id
    #[serde(rename = "req-id")]
    pub req_id: String,
    /// Server-side execution time
    #[serde(rename = "exec-duration-millis")]
    pub exec_duration_millis: Option<ExecDuration>,
}

/// Execution time in milliseconds, sent either as a number or as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExecDuration {
    /// Numeric form
    Number(f64),
    /// String form, as sent
    Text(String),
}

impl ExecDuration {
    /// The duration as a number, if the string form parses.
    pub fn as_millis(&self) -> Option<f64> {
        match self {
            ExecDuration::Number(n) => Some(*n),
            ExecDuration::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Error object returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error name
    pub name: String,
    /// Human-readable message
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}
