//! Storefront domain types shared by the order and inventory services.
//!
//! - `entities/` - records with identity (orders, products)
//! - `value_objects/` - pagination and stock reservation lines
//! - `ids` - store-assigned identifiers
//! - `error` - domain validation and parse errors

extern crate self as storefront_domain;

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    total_cents, NewOrder, NewProduct, Order, OrderItem, OrderStatus, Product, ProductUpdate,
};
pub use error::DomainError;
pub use ids::{OrderId, ProductId, UserId};
pub use value_objects::{Page, PageRequest, ReservationLine};
