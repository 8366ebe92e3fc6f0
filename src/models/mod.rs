//! Data models for the Wildberries API.
//!
//! Every record mirrors the remote schema field for field; nothing here is
//! derived or computed locally.
//!
//! - [`supplier`] - Statistics report records (incomes, stocks, orders, sales)
//! - [`account`] - Seller info and general response types
//! - [`records`] - The list wrapper report endpoints decode into

pub mod account;
pub mod records;
pub mod supplier;

pub use account::*;
pub use records::*;
pub use supplier::*;
