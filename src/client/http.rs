//! HTTP client implementation for the Wildberries API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use tokio::io::AsyncWrite;

use crate::api::{IncomeService, SupplierService};
use crate::{Error, Result};

use super::config::{ApiHosts, ClientConfig};
use super::decode::Reply;
use super::request::RequestBody;
use super::transport::{Response, Transport};

/// The main client for interacting with the Wildberries API.
///
/// The client holds the access token and the transport. It keeps no
/// per-call state, so one instance can be cloned and shared freely
/// between tasks; every call is an independent round trip.
///
/// # Example
///
/// ```no_run
/// use wildberries_rs::{ClientConfig, WildberriesClient};
///
/// # async fn example() -> wildberries_rs::Result<()> {
/// let client = WildberriesClient::new(
///     ClientConfig::default().with_access_token("your-token"),
/// )?;
///
/// let incomes = client.supplier().incomes().await?;
/// println!("{} incomes, HTTP {}", incomes.data.len(), incomes.response.status());
///
/// let seller = client.income().seller_info().await?;
/// println!("seller: {}", seller.data.name);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct WildberriesClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) config: ClientConfig,
}

impl WildberriesClient {
    /// Create a client from a configuration.
    ///
    /// Without a custom transport a `reqwest::Client` is built, using the
    /// configured timeout if any.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = match config.transport.clone() {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = config.timeout {
                    builder = builder.timeout(timeout);
                }
                let http = builder
                    .build()
                    .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;
                Arc::new(http) as Arc<dyn Transport>
            }
        };

        Ok(Self {
            inner: Arc::new(ClientInner { transport, config }),
        })
    }

    /// Create a client with the given token and defaults for everything else.
    pub fn with_token(access_token: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::default().with_access_token(access_token))
    }

    /// Create a client configured from `WILDBERRIES_TOKEN` and `WILDBERRIES_DEBUG`.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Get the supplier statistics service (incomes, stocks, orders, sales).
    pub fn supplier(&self) -> SupplierService {
        SupplierService::new(self.inner.clone())
    }

    /// Get the income service (seller info).
    pub fn income(&self) -> IncomeService {
        IncomeService::new(self.inner.clone())
    }

    /// Build an authorized request for any endpoint.
    ///
    /// A [`RequestBody::Form`] is form-encoded (with a content type on POST
    /// only); a [`RequestBody::Json`] is JSON-encoded.
    pub fn new_request(
        &self,
        method: Method,
        url: &str,
        body: Option<RequestBody>,
    ) -> Result<reqwest::Request> {
        self.inner.new_request(method, url, body)
    }

    /// Execute a request and decode the body into `T`.
    ///
    /// On a decode failure the response is available through
    /// [`Error::response`].
    pub async fn execute<T: DeserializeOwned + Default>(
        &self,
        request: reqwest::Request,
        deadline: Option<Duration>,
    ) -> Result<Reply<T>> {
        self.inner.execute(request, deadline).await
    }

    /// Execute a request and copy the body verbatim into `sink`, skipping
    /// decoding. The returned response keeps its status and headers; its
    /// body is empty.
    pub async fn execute_raw<W>(
        &self,
        request: reqwest::Request,
        deadline: Option<Duration>,
        sink: &mut W,
    ) -> Result<Response>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        self.inner.execute_raw(request, deadline, sink).await
    }

    /// Whether debug events are enabled.
    pub fn is_debug(&self) -> bool {
        self.inner.config.debug
    }

    /// The hosts endpoint paths are joined to.
    pub fn hosts(&self) -> &ApiHosts {
        &self.inner.config.hosts
    }
}

impl std::fmt::Debug for WildberriesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WildberriesClient")
            .field("config", &self.inner.config)
            .finish()
    }
}
