use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use mongodb::bson::{doc, oid::ObjectId, Bson};
use mongodb::Database;
use storefront_domain::{
    NewOrder, NewProduct, OrderId, OrderItem, OrderStatus, PageRequest, ProductId, ProductUpdate,
    ReservationLine, UserId,
};

use super::{MongoOrderRepo, MongoProductRepo};
use crate::infrastructure::{
    clock::FixedClock,
    ports::{ClockPort, OrderRepo, ProductRepo, RepoError},
};
use crate::test_fixtures::mongo_harness::MongoTestHarness;

fn base_time() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

fn order_repo(db: &Database, now: DateTime<Utc>) -> MongoOrderRepo {
    let clock: Arc<dyn ClockPort> = Arc::new(FixedClock(now));
    MongoOrderRepo::new(db, clock)
}

fn new_order(user_id: &str, status: Option<OrderStatus>) -> NewOrder {
    NewOrder {
        user_id: UserId::new(user_id),
        items: vec![OrderItem::new("p1", 2, 500)],
        total_cents: 1000,
        status,
    }
}

fn new_product(stock: i64) -> NewProduct {
    NewProduct {
        name: "Desk lamp".to_string(),
        description: "Brass".to_string(),
        price_cents: 4_500,
        stock,
    }
}

// =============================================================================
// Orders
// =============================================================================

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn create_stamps_clock_time_and_defaults_to_pending() {
    let harness = MongoTestHarness::start()
        .await
        .expect("Failed to start MongoDB harness");
    let db = harness.database("orders_create").await.expect("database");
    let now = base_time();
    let repo = order_repo(&db, now);

    let id = repo.create(new_order("u1", None)).await.expect("create");
    let order = repo.get(&id).await.expect("get");

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.user_id, UserId::new("u1"));
    assert_eq!(order.total_cents, 1000);
    assert_eq!(order.items, vec![OrderItem::new("p1", 2, 500)]);
    assert_eq!(order.created_at, now);
    assert_eq!(order.updated_at, now);

    let stored = db
        .collection::<mongodb::bson::Document>("orders")
        .find_one(doc! { "user_id": "u1" })
        .await
        .expect("find")
        .expect("stored document");
    assert!(matches!(stored.get("created_at"), Some(Bson::DateTime(_))));
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn get_reports_not_found_for_malformed_and_unknown_ids() {
    let harness = MongoTestHarness::start()
        .await
        .expect("Failed to start MongoDB harness");
    let db = harness.database("orders_get").await.expect("database");
    let repo = order_repo(&db, base_time());

    let malformed = repo.get(&OrderId::new("not-an-object-id")).await;
    assert!(matches!(malformed, Err(RepoError::NotFound { .. })));

    let unknown = repo.get(&OrderId::new(ObjectId::new().to_hex())).await;
    assert!(matches!(unknown, Err(RepoError::NotFound { .. })));
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn update_status_moves_updated_at_only() {
    let harness = MongoTestHarness::start()
        .await
        .expect("Failed to start MongoDB harness");
    let db = harness.database("orders_status").await.expect("database");
    let created = base_time();
    let later = created + Duration::minutes(5);

    let id = order_repo(&db, created)
        .create(new_order("u1", None))
        .await
        .expect("create");

    let repo = order_repo(&db, later);
    repo.update_status(&id, OrderStatus::Completed)
        .await
        .expect("update_status");

    let order = repo.get(&id).await.expect("get");
    assert_eq!(order.status, OrderStatus::Completed);
    assert_eq!(order.created_at, created);
    assert_eq!(order.updated_at, later);

    let missing = repo
        .update_status(&OrderId::new(ObjectId::new().to_hex()), OrderStatus::Cancelled)
        .await;
    assert!(matches!(missing, Err(RepoError::NotFound { .. })));
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn list_by_user_is_newest_first_and_paged() {
    let harness = MongoTestHarness::start()
        .await
        .expect("Failed to start MongoDB harness");
    let db = harness.database("orders_list").await.expect("database");
    let start = base_time();

    let mut ids = Vec::new();
    for minute in 0..5 {
        let repo = order_repo(&db, start + Duration::minutes(minute));
        ids.push(repo.create(new_order("u1", None)).await.expect("create"));
    }
    order_repo(&db, start + Duration::minutes(10))
        .create(new_order("u2", None))
        .await
        .expect("create other user");

    let repo = order_repo(&db, start);
    let user = UserId::new("u1");

    let first = repo
        .list_by_user(&user, PageRequest::new(1, 2))
        .await
        .expect("first page");
    assert_eq!(first.total, 5);
    let first_ids: Vec<OrderId> = first.items.into_iter().map(|o| o.id).collect();
    assert_eq!(first_ids, vec![ids[4].clone(), ids[3].clone()]);

    let last = repo
        .list_by_user(&user, PageRequest::new(3, 2))
        .await
        .expect("last page");
    assert_eq!(last.total, 5);
    let last_ids: Vec<OrderId> = last.items.into_iter().map(|o| o.id).collect();
    assert_eq!(last_ids, vec![ids[0].clone()]);

    let beyond = repo
        .list_by_user(&user, PageRequest::new(4, 2))
        .await
        .expect("empty page");
    assert_eq!(beyond.total, 5);
    assert!(beyond.items.is_empty());
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn get_reads_documents_written_with_other_numeric_types() {
    let harness = MongoTestHarness::start()
        .await
        .expect("Failed to start MongoDB harness");
    let db = harness.database("orders_legacy").await.expect("database");
    let oid = ObjectId::new();
    let written = mongodb::bson::DateTime::from_millis(1_700_000_000_000);

    db.collection::<mongodb::bson::Document>("orders")
        .insert_one(doc! {
            "_id": oid,
            "user_id": "u1",
            "items": [{ "product_id": "p1", "quantity": 2.0, "price_cents": 500_i32 }],
            "total_cents": 1000.0,
            "status": "cancelled",
            "created_at": written,
            "updated_at": written,
        })
        .await
        .expect("insert");

    let order = order_repo(&db, base_time())
        .get(&OrderId::new(oid.to_hex()))
        .await
        .expect("get");
    assert_eq!(order.total_cents, 1000);
    assert_eq!(order.items, vec![OrderItem::new("p1", 2, 500)]);
    assert_eq!(order.status, OrderStatus::Cancelled);
    assert_eq!(order.created_at, base_time());
}

// =============================================================================
// Products
// =============================================================================

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn take_stock_only_decrements_when_enough_remains() {
    let harness = MongoTestHarness::start()
        .await
        .expect("Failed to start MongoDB harness");
    let db = harness.database("products_stock").await.expect("database");
    let repo = MongoProductRepo::new(&db);

    let product = repo.create(new_product(3)).await.expect("create");
    let line = ReservationLine::new(product.id.clone(), 2);

    assert!(repo.take_stock(&line).await.expect("first take"));
    assert_eq!(repo.get(&product.id).await.expect("get").stock, 1);

    assert!(!repo.take_stock(&line).await.expect("second take"));
    assert_eq!(repo.get(&product.id).await.expect("get").stock, 1);

    assert!(repo.restore_stock(&line).await.expect("restore"));
    assert_eq!(repo.get(&product.id).await.expect("get").stock, 3);

    let unknown = ReservationLine::new(ObjectId::new().to_hex(), 1);
    assert!(!repo.take_stock(&unknown).await.expect("unknown take"));
    assert!(!repo.restore_stock(&unknown).await.expect("unknown restore"));

    let malformed = ReservationLine::new("not-an-object-id", 1);
    assert!(!repo.take_stock(&malformed).await.expect("malformed take"));
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn product_update_and_delete_report_missing_ids() {
    let harness = MongoTestHarness::start()
        .await
        .expect("Failed to start MongoDB harness");
    let db = harness.database("products_crud").await.expect("database");
    let repo = MongoProductRepo::new(&db);
    let missing = ProductId::new(ObjectId::new().to_hex());

    let update = ProductUpdate {
        stock: Some(9),
        ..ProductUpdate::default()
    };
    let result = repo.update(&missing, update.clone()).await;
    assert!(matches!(result, Err(RepoError::NotFound { .. })));
    let result = repo.delete(&missing).await;
    assert!(matches!(result, Err(RepoError::NotFound { .. })));

    let kept = repo.create(new_product(1)).await.expect("create kept");
    let removed = repo.create(new_product(2)).await.expect("create removed");

    let updated = repo.update(&kept.id, update).await.expect("update");
    assert_eq!(updated.stock, 9);
    assert_eq!(updated.name, "Desk lamp");
    assert_eq!(updated.description, "Brass");

    assert_eq!(repo.list().await.expect("list").len(), 2);

    repo.delete(&removed.id).await.expect("delete");
    let gone = repo.get(&removed.id).await;
    assert!(matches!(gone, Err(RepoError::NotFound { .. })));
    assert_eq!(repo.list().await.expect("list").len(), 1);
}
