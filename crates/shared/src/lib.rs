//! Storefront wire contracts
//!
//! JSON request/response bodies exchanged over HTTP:
//! - Order service public API (`orders`)
//! - Inventory service public API and the reservation calls the order
//!   service makes against it (`inventory`)
//! - The error envelope every endpoint uses (`errors`)
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and serde_json
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain IDs** - identifiers travel as plain strings

pub mod errors;
pub mod inventory;
pub mod orders;

pub use errors::ErrorResponse;
pub use inventory::{ReserveItemData, ReserveStockRequest, ReserveStockResponse};
pub use orders::{
    CreateOrderRequest, CreateOrderResponse, ListOrdersQuery, OrderItemData, OrderStatusResponse,
    UpdateOrderStatusRequest,
};
