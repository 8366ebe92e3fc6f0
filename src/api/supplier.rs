//! Supplier statistics service.

use std::sync::Arc;
use std::time::Duration;

use crate::client::{ClientInner, Reply};
use crate::models::{Income, Order, Records, Sale, Stock};
use crate::Result;

const INCOMES_PATH: &str = "/api/v1/supplier/incomes";
const STOCKS_PATH: &str = "/api/v1/supplier/stocks";
const ORDERS_PATH: &str = "/api/v1/supplier/orders";
const SALES_PATH: &str = "/api/v1/supplier/sales";

/// Service for the supplier statistics reports.
///
/// Each call is a single GET against the statistics host. The
/// [`Reply`] carries the decoded records and the HTTP response.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: wildberries_rs::WildberriesClient) -> wildberries_rs::Result<()> {
/// use std::time::Duration;
///
/// let orders = client.supplier().orders().await?;
/// for order in &orders.data {
///     println!("{} {} {}", order.date, order.supplier_article, order.finished_price);
/// }
///
/// // Give up if the report takes longer than ten seconds
/// let sales = client
///     .supplier()
///     .with_deadline(Duration::from_secs(10))
///     .sales()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct SupplierService {
    inner: Arc<ClientInner>,
    deadline: Option<Duration>,
}

impl SupplierService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self {
            inner,
            deadline: None,
        }
    }

    /// Abort calls made through this service after `deadline`.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Get supplies delivered to warehouses.
    pub async fn incomes(&self) -> Result<Reply<Records<Income>>> {
        self.report(INCOMES_PATH).await
    }

    /// Get warehouse stock.
    pub async fn stocks(&self) -> Result<Reply<Records<Stock>>> {
        self.report(STOCKS_PATH).await
    }

    /// Get customer orders.
    pub async fn orders(&self) -> Result<Reply<Records<Order>>> {
        self.report(ORDERS_PATH).await
    }

    /// Get sales and returns.
    pub async fn sales(&self) -> Result<Reply<Records<Sale>>> {
        self.report(SALES_PATH).await
    }

    async fn report<T>(&self, path: &str) -> Result<Reply<Records<T>>>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.inner.config.hosts.statistics_url(path);
        self.inner.get(&url, self.deadline).await
    }
}
