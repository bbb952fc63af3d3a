//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the services. Everything else is concrete types.
//! Ports exist for:
//! - Database access (orders, products)
//! - The inventory service as seen from the order service
//! - Clock (for testing)

mod error;
mod external;
mod repos;
mod testing;

pub use error::{InventoryError, RepoError};
pub use external::InventoryPort;
pub use repos::{OrderRepo, ProductRepo};
pub use testing::ClockPort;

#[cfg(test)]
pub use external::MockInventoryPort;
#[cfg(test)]
pub use repos::{MockOrderRepo, MockProductRepo};
