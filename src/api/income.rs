//! Income service.

use std::sync::Arc;
use std::time::Duration;

use crate::client::{ClientInner, Reply};
use crate::models::SellerInfo;
use crate::Result;

const SELLER_INFO_PATH: &str = "/api/v1/seller-info";

/// Service for seller account endpoints on the common host.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: wildberries_rs::WildberriesClient) -> wildberries_rs::Result<()> {
/// let seller = client.income().seller_info().await?;
/// println!("{} ({})", seller.data.name, seller.data.trade_mark);
/// # Ok(())
/// # }
/// ```
pub struct IncomeService {
    inner: Arc<ClientInner>,
    deadline: Option<Duration>,
}

impl IncomeService {
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

    /// Get the seller's name, id and trade mark.
    pub async fn seller_info(&self) -> Result<Reply<SellerInfo>> {
        let url = self.inner.config.hosts.common_url(SELLER_INFO_PATH);
        self.inner.get(&url, self.deadline).await
    }
}
