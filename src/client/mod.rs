//! HTTP client, request building and response decoding for the
//! Wildberries API.
//!
//! This module provides the main entry point [`WildberriesClient`] and the
//! pieces it is made of: the [`Transport`] capability that executes
//! requests, [`RequestBody`] for payloads, and [`Reply`] for decoded
//! results.
//!
//! # Example
//!
//! ```no_run
//! use wildberries_rs::WildberriesClient;
//!
//! # async fn example() -> wildberries_rs::Result<()> {
//! let client = WildberriesClient::with_token("your-token")?;
//!
//! let stocks = client.supplier().stocks().await?;
//! for stock in stocks.data.iter() {
//!     println!("{} @ {}: {}", stock.supplier_article, stock.warehouse_name, stock.quantity);
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod decode;
mod http;
mod request;
mod transport;

pub use config::{ApiHosts, ClientConfig, DEBUG_ENV_VAR, TOKEN_ENV_VAR};
pub use decode::Reply;
pub use http::WildberriesClient;
pub use request::{FormValues, RequestBody};
pub use transport::{Response, Transport};
pub(crate) use http::ClientInner;
