//! Domain entities - Core business objects with identity

mod order;
mod product;

pub use order::{total_cents, NewOrder, Order, OrderItem, OrderStatus};
pub use product::{NewProduct, Product, ProductUpdate};
