//! API service modules for Wildberries endpoints.
//!
//! Each service groups the endpoints of one remote resource.

mod income;
mod supplier;

pub use income::IncomeService;
pub use supplier::SupplierService;
