//! MongoDB product repository implementation.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use storefront_domain::{NewProduct, Product, ProductId, ProductUpdate, ReservationLine};

use super::helpers::{parse_object_id, with_timeout, DocumentExt, LIST_TIMEOUT, OP_TIMEOUT};
use crate::infrastructure::ports::{ProductRepo, RepoError};

const COLLECTION: &str = "products";

pub struct MongoProductRepo {
    collection: Collection<Document>,
}

impl MongoProductRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Document>(COLLECTION),
        }
    }
}

#[async_trait]
impl ProductRepo for MongoProductRepo {
    async fn create(&self, product: NewProduct) -> Result<Product, RepoError> {
        let oid = ObjectId::new();
        let product = product.into_product(ProductId::new(oid.to_hex()));

        with_timeout(
            "create_product",
            OP_TIMEOUT,
            self.collection.insert_one(product_to_document(oid, &product)),
        )
        .await?;

        tracing::debug!(product_id = %product.id, "Inserted product");
        Ok(product)
    }

    async fn get(&self, id: &ProductId) -> Result<Product, RepoError> {
        let oid =
            parse_object_id(id.as_str()).ok_or_else(|| RepoError::not_found("Product", id))?;

        let document = with_timeout(
            "get_product",
            OP_TIMEOUT,
            self.collection.find_one(doc! { "_id": oid }),
        )
        .await?
        .ok_or_else(|| RepoError::not_found("Product", id))?;

        document_to_product(&document)
    }

    async fn update(&self, id: &ProductId, update: ProductUpdate) -> Result<Product, RepoError> {
        if update.is_empty() {
            return self.get(id).await;
        }
        let oid =
            parse_object_id(id.as_str()).ok_or_else(|| RepoError::not_found("Product", id))?;

        let document = with_timeout(
            "update_product",
            OP_TIMEOUT,
            self.collection
                .find_one_and_update(doc! { "_id": oid }, doc! { "$set": update_to_document(&update) })
                .return_document(ReturnDocument::After),
        )
        .await?
        .ok_or_else(|| RepoError::not_found("Product", id))?;

        document_to_product(&document)
    }

    async fn delete(&self, id: &ProductId) -> Result<(), RepoError> {
        let oid =
            parse_object_id(id.as_str()).ok_or_else(|| RepoError::not_found("Product", id))?;

        let result = with_timeout(
            "delete_product",
            OP_TIMEOUT,
            self.collection.delete_one(doc! { "_id": oid }),
        )
        .await?;

        if result.deleted_count == 0 {
            return Err(RepoError::not_found("Product", id));
        }
        tracing::debug!(product_id = %id, "Deleted product");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Product>, RepoError> {
        let find = self.collection.find(doc! {});
        let documents: Vec<Document> = with_timeout("list_products", LIST_TIMEOUT, async {
            let cursor = find.await?;
            cursor.try_collect().await
        })
        .await?;

        documents.iter().map(document_to_product).collect()
    }

    async fn take_stock(&self, line: &ReservationLine) -> Result<bool, RepoError> {
        let Some(oid) = parse_object_id(line.product_id.as_str()) else {
            return Ok(false);
        };

        // The filter and the decrement are one server-side operation, so two
        // concurrent reservations can never both take the last unit.
        let updated = with_timeout(
            "take_stock",
            OP_TIMEOUT,
            self.collection.find_one_and_update(
                doc! { "_id": oid, "stock": { "$gte": line.quantity } },
                doc! { "$inc": { "stock": -line.quantity } },
            ),
        )
        .await?;

        Ok(updated.is_some())
    }

    async fn restore_stock(&self, line: &ReservationLine) -> Result<bool, RepoError> {
        let Some(oid) = parse_object_id(line.product_id.as_str()) else {
            return Ok(false);
        };

        let result = with_timeout(
            "restore_stock",
            OP_TIMEOUT,
            self.collection.update_one(
                doc! { "_id": oid },
                doc! { "$inc": { "stock": line.quantity } },
            ),
        )
        .await?;

        Ok(result.matched_count > 0)
    }
}

// =============================================================================
// Document conversion
// =============================================================================

fn product_to_document(oid: ObjectId, product: &Product) -> Document {
    doc! {
        "_id": oid,
        "name": product.name.as_str(),
        "description": product.description.as_str(),
        "price_cents": product.price_cents,
        "stock": product.stock,
    }
}

fn update_to_document(update: &ProductUpdate) -> Document {
    let mut set = Document::new();
    if let Some(name) = &update.name {
        set.insert("name", name.as_str());
    }
    if let Some(description) = &update.description {
        set.insert("description", description.as_str());
    }
    if let Some(price_cents) = update.price_cents {
        set.insert("price_cents", price_cents);
    }
    if let Some(stock) = update.stock {
        set.insert("stock", stock);
    }
    set
}

fn document_to_product(document: &Document) -> Result<Product, RepoError> {
    Ok(Product {
        id: ProductId::new(document.get_id_string()?),
        name: document.get_string_strict("name")?,
        // Older records were written without a description
        description: document.get_optional_string("description")?.unwrap_or_default(),
        price_cents: document.get_i64_strict("price_cents")?,
        stock: document.get_i64_strict("stock")?,
    })
}
