//! Use cases - Request orchestration.
//!
//! `orders` drives the order service; `products` drives the inventory
//! service. Both talk to infrastructure only through port traits.

pub mod orders;
pub mod products;
pub mod validation;

pub use orders::{OrderError, OrderUseCases};
pub use products::{ProductError, ProductUseCases};
