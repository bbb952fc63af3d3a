//! Order service request and response bodies

use serde::{Deserialize, Serialize};

/// Line item as submitted by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemData {
    pub product_id: String,
    pub quantity: i64,
    /// Unit price in cents; missing means free
    #[serde(default)]
    pub price_cents: i64,
}

/// POST /orders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub items: Vec<OrderItemData>,
    /// Accepted for compatibility; not stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

/// 201 body for POST /orders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub id: String,
}

/// PATCH /orders/{id}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

/// 200 body for PATCH /orders/{id}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatusResponse {
    pub id: String,
    pub status: String,
}

/// GET /orders query string
///
/// `page` and `page_size` stay raw text: empty or non-numeric values are
/// clamped to defaults by the handler, never rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOrdersQuery {
    pub user_id: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}
