//! External service port traits.

use async_trait::async_trait;
use storefront_domain::ReservationLine;

use super::error::InventoryError;

/// The inventory service, as seen by the order workflow.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryPort: Send + Sync {
    /// Hold stock for every line, all or nothing.
    async fn reserve(&self, lines: &[ReservationLine]) -> Result<(), InventoryError>;

    /// Give back stock taken by an earlier `reserve`.
    async fn release(&self, lines: &[ReservationLine]) -> Result<(), InventoryError>;
}
