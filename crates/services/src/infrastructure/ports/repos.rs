//! Repository port traits.

use async_trait::async_trait;
use storefront_domain::{
    NewOrder, NewProduct, Order, OrderId, OrderStatus, Page, PageRequest, Product, ProductId,
    ProductUpdate, ReservationLine, UserId,
};

use super::error::RepoError;

// =============================================================================
// Orders
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepo: Send + Sync {
    /// Write a new order; the store assigns the identifier and timestamps.
    async fn create(&self, order: NewOrder) -> Result<OrderId, RepoError>;

    /// `RepoError::NotFound` for malformed or unknown identifiers.
    async fn get(&self, id: &OrderId) -> Result<Order, RepoError>;

    /// `RepoError::NotFound` when nothing matched.
    async fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<(), RepoError>;

    /// Newest first, with the total number of the user's orders.
    async fn list_by_user(
        &self,
        user_id: &UserId,
        page: PageRequest,
    ) -> Result<Page<Order>, RepoError>;
}

// =============================================================================
// Products
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepo: Send + Sync {
    async fn create(&self, product: NewProduct) -> Result<Product, RepoError>;
    async fn get(&self, id: &ProductId) -> Result<Product, RepoError>;
    async fn update(&self, id: &ProductId, update: ProductUpdate) -> Result<Product, RepoError>;
    async fn delete(&self, id: &ProductId) -> Result<(), RepoError>;
    async fn list(&self) -> Result<Vec<Product>, RepoError>;

    // Stock
    /// Decrement stock only if at least `line.quantity` is available.
    /// Returns false for unknown products or insufficient stock.
    async fn take_stock(&self, line: &ReservationLine) -> Result<bool, RepoError>;
    /// Increment stock. Returns false for unknown products.
    async fn restore_stock(&self, line: &ReservationLine) -> Result<bool, RepoError>;
}
