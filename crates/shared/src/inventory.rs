//! Inventory service reservation contract
//!
//! The order service calls `POST {inventory}/products/reserve` before writing
//! an order and `POST {inventory}/products/release` to give stock back when
//! that write fails.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveItemData {
    pub product_id: String,
    pub quantity: i64,
}

/// Body of both the reserve and the release calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveStockRequest {
    #[serde(default)]
    pub items: Vec<ReserveItemData>,
}

/// 200 body for a successful reservation or release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveStockResponse {
    pub reserved: Vec<ReserveItemData>,
}
