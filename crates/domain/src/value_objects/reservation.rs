//! Stock reservation line

use serde::{Deserialize, Serialize};

use storefront_domain::{OrderItem, ProductId};

/// A product/quantity pair to hold (or give back) in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationLine {
    pub product_id: ProductId,
    pub quantity: i64,
}

impl ReservationLine {
    pub fn new(product_id: impl Into<ProductId>, quantity: i64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

impl From<&OrderItem> for ReservationLine {
    fn from(item: &OrderItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            quantity: item.quantity,
        }
    }
}
