//! Order entity - A user's purchase of one or more products
//!
//! Unit prices are snapshotted into each line item when the order is placed;
//! the total is computed once from those snapshots and never re-derived from
//! current product prices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_domain::{DomainError, OrderId, ProductId, UserId};

/// Lifecycle status of an order.
///
/// Any status may be set from any other; there is no transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Completed and cancelled orders are final in business terms, even
    /// though status updates out of them are still accepted.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(DomainError::parse(format!("Unknown order status: {}", other))),
        }
    }
}

/// One product/quantity/unit-price snapshot inside an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: i64,
    /// Unit price at the time the order was placed
    pub price_cents: i64,
}

impl OrderItem {
    pub fn new(product_id: impl Into<ProductId>, quantity: i64, price_cents: i64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            price_cents,
        }
    }

    /// quantity × unit price, or `None` on overflow.
    pub fn subtotal_cents(&self) -> Option<i64> {
        self.quantity.checked_mul(self.price_cents)
    }
}

/// Sum of all item subtotals, or `None` if any step overflows.
pub fn total_cents(items: &[OrderItem]) -> Option<i64> {
    items
        .iter()
        .try_fold(0i64, |acc, item| acc.checked_add(item.subtotal_cents()?))
}

/// An order that has not been written yet.
///
/// The store assigns the identifier and timestamps on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub total_cents: i64,
    /// Defaults to `pending` when written
    pub status: Option<OrderStatus>,
}

impl NewOrder {
    pub fn pending(user_id: UserId, items: Vec<OrderItem>, total_cents: i64) -> Self {
        Self {
            user_id,
            items,
            total_cents,
            status: Some(OrderStatus::Pending),
        }
    }

    pub fn status_or_default(&self) -> OrderStatus {
        self.status.unwrap_or_default()
    }

    /// Attach the store-assigned identity.
    pub fn into_order(self, id: OrderId, now: DateTime<Utc>) -> Order {
        Order {
            id,
            status: self.status_or_default(),
            user_id: self.user_id,
            items: self.items,
            total_cents: self.total_cents,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A persisted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub total_cents: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_is_a_parse_error() {
        let err = "shipped".parse::<OrderStatus>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
        assert!("Pending".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }

    #[test]
    fn terminal_statuses() {
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
    }

    #[test]
    fn total_sums_item_subtotals() {
        let items = vec![
            OrderItem::new("p1", 2, 500),
            OrderItem::new("p2", 3, 125),
            OrderItem::new("p3", 1, 0),
        ];
        assert_eq!(total_cents(&items), Some(1375));
        assert_eq!(total_cents(&[]), Some(0));
    }

    #[test]
    fn total_reports_overflow() {
        let items = vec![OrderItem::new("p1", i64::MAX, 2)];
        assert_eq!(total_cents(&items), None);

        let items = vec![
            OrderItem::new("p1", 1, i64::MAX),
            OrderItem::new("p2", 1, 1),
        ];
        assert_eq!(total_cents(&items), None);
    }

    #[test]
    fn new_order_defaults_to_pending() {
        let order = NewOrder {
            user_id: UserId::new("u1"),
            items: vec![OrderItem::new("p1", 1, 100)],
            total_cents: 100,
            status: None,
        };
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let saved = order.into_order(OrderId::new("o1"), now);

        assert_eq!(saved.status, OrderStatus::Pending);
        assert_eq!(saved.created_at, now);
        assert_eq!(saved.updated_at, now);
    }
}
