//! Record builders shared by unit tests.

pub mod mongo_harness;

use chrono::{TimeZone, Utc};
use storefront_domain::{Order, OrderId, OrderItem, OrderStatus, Product, ProductId, UserId};

/// A pending two-line order totalling 1250 cents.
pub fn sample_order(id: &str, user_id: &str) -> Order {
    let created_at = Utc
        .with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
        .unwrap();
    Order {
        id: OrderId::new(id),
        user_id: UserId::new(user_id),
        items: vec![OrderItem::new("p1", 2, 500), OrderItem::new("p2", 1, 250)],
        total_cents: 1250,
        status: OrderStatus::Pending,
        created_at,
        updated_at: created_at,
    }
}

pub fn sample_product(id: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: "Desk lamp".to_string(),
        description: "Brass, 40cm".to_string(),
        price_cents: 4_500,
        stock: 12,
    }
}
