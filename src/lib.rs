//! # wildberries-rs
//!
//! An async Rust client for the Wildberries supplier API.
//!
//! The crate authenticates with a static access token, builds requests,
//! sends them through a pluggable transport and decodes the answers into
//! typed report records.
//!
//! ## Features
//!
//! - **Supplier statistics**: incomes, stocks, orders and sales reports
//! - **Seller info**: the seller's name, id and trade mark
//! - **Lenient decoding**: JSON first, XML as a fallback, empty bodies accepted
//! - **Inspectable responses**: status and headers come back with every
//!   result, and with every decode error
//! - **Pluggable transport**: bring your own [`client::Transport`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wildberries_rs::{ClientConfig, WildberriesClient};
//!
//! #[tokio::main]
//! async fn main() -> wildberries_rs::Result<()> {
//!     let client = WildberriesClient::new(
//!         ClientConfig::from_env().with_debug(true),
//!     )?;
//!
//!     let incomes = client.supplier().incomes().await?;
//!     println!("HTTP {}: {} incomes", incomes.response.status(), incomes.data.len());
//!
//!     for income in &incomes.data {
//!         println!("{} {} x{}", income.income_id, income.supplier_article, income.quantity);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Decode Failures
//!
//! A body that is neither JSON nor XML of the expected shape becomes
//! [`Error::Decode`], which still carries the response:
//!
//! ```rust,no_run
//! # async fn example(client: wildberries_rs::WildberriesClient) {
//! match client.supplier().stocks().await {
//!     Ok(reply) => println!("{} stock rows", reply.data.len()),
//!     Err(err) => match err.response() {
//!         Some(response) => eprintln!("HTTP {}: {}", response.status(), response.text()),
//!         None => eprintln!("request failed: {err}"),
//!     },
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use client::{ApiHosts, ClientConfig, Reply, Response, Transport, WildberriesClient};
pub use error::{Error, Result};
pub use models::{Income, Order, Records, Sale, SellerInfo, Stock};

/// Prelude module for convenient imports.
///
/// ```rust
/// use wildberries_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{IncomeService, SupplierService};
    pub use crate::client::{
        ApiHosts, ClientConfig, FormValues, Reply, RequestBody, Response, Transport,
        WildberriesClient,
    };
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        ApiError, ExecDuration, Income, InvocationInfo, Order, Records, Sale, SellerInfo, Stock,
    };
}
