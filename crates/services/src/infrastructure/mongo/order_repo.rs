//! MongoDB order repository implementation.
//!
//! Orders live in the `orders` collection as loosely-typed documents;
//! integer fields are read through the shared coercion helper.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::{Collection, Database};
use storefront_domain::{
    NewOrder, Order, OrderId, OrderItem, OrderStatus, Page, PageRequest, ProductId, UserId,
};

use super::helpers::{
    parse_object_id, to_bson_datetime, with_timeout, DocumentExt, LIST_TIMEOUT, OP_TIMEOUT,
};
use crate::infrastructure::ports::{ClockPort, OrderRepo, RepoError};

const COLLECTION: &str = "orders";

pub struct MongoOrderRepo {
    collection: Collection<Document>,
    clock: Arc<dyn ClockPort>,
}

impl MongoOrderRepo {
    pub fn new(db: &Database, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            collection: db.collection::<Document>(COLLECTION),
            clock,
        }
    }
}

#[async_trait]
impl OrderRepo for MongoOrderRepo {
    async fn create(&self, order: NewOrder) -> Result<OrderId, RepoError> {
        let oid = ObjectId::new();
        let order = order.into_order(OrderId::new(oid.to_hex()), self.clock.now());
        let document = order_to_document(oid, &order);

        with_timeout("create_order", OP_TIMEOUT, self.collection.insert_one(document)).await?;

        tracing::debug!(order_id = %order.id, user_id = %order.user_id, "Inserted order");
        Ok(order.id)
    }

    async fn get(&self, id: &OrderId) -> Result<Order, RepoError> {
        let oid = parse_object_id(id.as_str()).ok_or_else(|| RepoError::not_found("Order", id))?;

        let document = with_timeout(
            "get_order",
            OP_TIMEOUT,
            self.collection.find_one(doc! { "_id": oid }),
        )
        .await?
        .ok_or_else(|| RepoError::not_found("Order", id))?;

        document_to_order(&document)
    }

    async fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<(), RepoError> {
        let oid = parse_object_id(id.as_str()).ok_or_else(|| RepoError::not_found("Order", id))?;
        let update = doc! {
            "$set": {
                "status": status.as_str(),
                "updated_at": to_bson_datetime(self.clock.now()),
            }
        };

        let result = with_timeout(
            "update_order_status",
            OP_TIMEOUT,
            self.collection.update_one(doc! { "_id": oid }, update),
        )
        .await?;

        if result.matched_count == 0 {
            return Err(RepoError::not_found("Order", id));
        }
        tracing::debug!(order_id = %id, status = %status, "Updated order status");
        Ok(())
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
        page: PageRequest,
    ) -> Result<Page<Order>, RepoError> {
        let filter = doc! { "user_id": user_id.as_str() };

        let total = with_timeout(
            "count_orders",
            LIST_TIMEOUT,
            self.collection.count_documents(filter.clone()),
        )
        .await?;

        let limit = i64::try_from(page.page_size()).unwrap_or(i64::MAX);
        let find = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .skip(page.skip())
            .limit(limit);
        let documents: Vec<Document> = with_timeout("list_orders", LIST_TIMEOUT, async {
            let cursor = find.await?;
            cursor.try_collect().await
        })
        .await?;

        let items = documents
            .iter()
            .map(document_to_order)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page {
            items,
            total,
            request: page,
        })
    }
}

// =============================================================================
// Document conversion
// =============================================================================

pub(crate) fn order_to_document(oid: ObjectId, order: &Order) -> Document {
    let items: Vec<Bson> = order
        .items
        .iter()
        .map(|item| {
            Bson::Document(doc! {
                "product_id": item.product_id.as_str(),
                "quantity": item.quantity,
                "price_cents": item.price_cents,
            })
        })
        .collect();

    doc! {
        "_id": oid,
        "user_id": order.user_id.as_str(),
        "items": items,
        "total_cents": order.total_cents,
        "status": order.status.as_str(),
        "created_at": to_bson_datetime(order.created_at),
        "updated_at": to_bson_datetime(order.updated_at),
    }
}

pub(crate) fn document_to_order(document: &Document) -> Result<Order, RepoError> {
    let status = document.get_string_strict("status")?;
    let status = status
        .parse::<OrderStatus>()
        .map_err(|e| RepoError::serialization(e.to_string()))?;

    let items = document
        .get_documents_strict("items")?
        .into_iter()
        .map(document_to_item)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Order {
        id: OrderId::new(document.get_id_string()?),
        user_id: UserId::new(document.get_string_strict("user_id")?),
        items,
        total_cents: document.get_i64_strict("total_cents")?,
        status,
        created_at: document.get_datetime_strict("created_at")?,
        updated_at: document.get_datetime_strict("updated_at")?,
    })
}

fn document_to_item(document: &Document) -> Result<OrderItem, RepoError> {
    Ok(OrderItem {
        product_id: ProductId::new(document.get_string_strict("product_id")?),
        quantity: document.get_i64_strict("quantity")?,
        price_cents: document.get_i64_strict("price_cents")?,
    })
}
