//! Create order use case.
//!
//! Validates the request, prices it from the submitted unit prices, reserves
//! stock with the inventory service and writes the order as pending.

use std::sync::Arc;
use storefront_domain::{total_cents, NewOrder, OrderId, OrderItem, ReservationLine, UserId};

use crate::infrastructure::ports::{InventoryError, InventoryPort, OrderRepo};
use crate::use_cases::validation::{
    require_any, require_non_empty, require_non_negative, require_positive, ValidationError,
};

use super::error::OrderError;

/// Create order use case.
///
/// Orchestrates: validation, pricing, one reservation call, persistence, and
/// a best-effort release when persistence fails after stock was reserved.
pub struct CreateOrder {
    order_repo: Arc<dyn OrderRepo>,
    inventory: Arc<dyn InventoryPort>,
}

impl CreateOrder {
    pub fn new(order_repo: Arc<dyn OrderRepo>, inventory: Arc<dyn InventoryPort>) -> Self {
        Self {
            order_repo,
            inventory,
        }
    }

    /// Execute the create order use case.
    ///
    /// # Returns
    /// * `Ok(OrderId)` - The identifier of the new pending order
    /// * `Err(OrderError::StockInsufficient)` - The inventory service refused the reservation
    /// * `Err(OrderError::InventoryUnavailable)` - The inventory service did not answer
    pub async fn execute(
        &self,
        user_id: UserId,
        items: Vec<OrderItem>,
    ) -> Result<OrderId, OrderError> {
        let total = validate(&user_id, &items)?;
        let lines: Vec<ReservationLine> = items.iter().map(ReservationLine::from).collect();

        match self.inventory.reserve(&lines).await {
            Ok(()) => {
                tracing::debug!(user_id = %user_id, items = lines.len(), "Stock reserved");
            }
            Err(InventoryError::Rejected { status }) => {
                tracing::info!(user_id = %user_id, status, "Inventory refused reservation");
                return Err(OrderError::StockInsufficient);
            }
            Err(InventoryError::Unavailable(reason)) => {
                tracing::error!(user_id = %user_id, error = %reason, "Inventory service unavailable");
                return Err(OrderError::InventoryUnavailable(reason));
            }
        }

        let order = NewOrder::pending(user_id, items, total);
        match self.order_repo.create(order).await {
            Ok(order_id) => {
                tracing::info!(order_id = %order_id, total_cents = total, "Order created");
                Ok(order_id)
            }
            Err(e) => {
                tracing::error!(error = %e, "Order write failed after reservation; releasing stock");
                self.release(&lines).await;
                Err(OrderError::Repo(e))
            }
        }
    }

    async fn release(&self, lines: &[ReservationLine]) {
        match self.inventory.release(lines).await {
            Ok(()) => tracing::info!(items = lines.len(), "Released reserved stock"),
            Err(e) => tracing::error!(error = %e, "Failed to release reserved stock"),
        }
    }
}

/// Check the request and return its total price in cents.
fn validate(user_id: &UserId, items: &[OrderItem]) -> Result<i64, ValidationError> {
    require_non_empty(user_id.as_str(), "user_id")?;
    require_any(items, "items")?;
    for item in items {
        require_non_empty(item.product_id.as_str(), "product_id")?;
        require_positive(item.quantity, "quantity")?;
        require_non_negative(item.price_cents, "price_cents")?;
    }
    total_cents(items)
        .ok_or_else(|| ValidationError::invalid("items", "total price overflows"))
}
