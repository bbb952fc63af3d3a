//! Storefront services library.
//!
//! Server-side code for the order and inventory HTTP services.
//!
//! ## Structure
//!
//! - `use_cases/` - Order workflow and product operations
//! - `infrastructure/` - Port traits and their adapters (MongoDB, inventory HTTP client)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Shared builders for unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::{InventoryApp, OrderApp};
