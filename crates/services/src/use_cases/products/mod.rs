//! Product use cases.
//!
//! Catalogue CRUD is a thin pass-through to the repository; the stock
//! reservation endpoints live in [`stock`].

use std::sync::Arc;

use storefront_domain::{NewProduct, Product, ProductId, ProductUpdate};

use crate::infrastructure::ports::ProductRepo;

mod error;
mod stock;

pub use error::ProductError;
pub use stock::{ReleaseStock, ReserveStock};

/// Container for product use cases.
pub struct ProductUseCases {
    pub ops: Arc<ProductOps>,
    pub reserve: Arc<ReserveStock>,
    pub release: Arc<ReleaseStock>,
}

impl ProductUseCases {
    pub fn new(ops: Arc<ProductOps>, reserve: Arc<ReserveStock>, release: Arc<ReleaseStock>) -> Self {
        Self {
            ops,
            reserve,
            release,
        }
    }

    pub fn from_repo(product_repo: Arc<dyn ProductRepo>) -> Self {
        Self::new(
            Arc::new(ProductOps::new(product_repo.clone())),
            Arc::new(ReserveStock::new(product_repo.clone())),
            Arc::new(ReleaseStock::new(product_repo)),
        )
    }
}

/// Product CRUD operations.
pub struct ProductOps {
    product_repo: Arc<dyn ProductRepo>,
}

impl ProductOps {
    pub fn new(product_repo: Arc<dyn ProductRepo>) -> Self {
        Self { product_repo }
    }

    pub async fn create(&self, product: NewProduct) -> Result<Product, ProductError> {
        let product = self.product_repo.create(product).await?;
        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    pub async fn get(&self, id: &ProductId) -> Result<Product, ProductError> {
        self.product_repo
            .get(id)
            .await
            .map_err(|e| ProductError::from_repo(id, e))
    }

    pub async fn list(&self) -> Result<Vec<Product>, ProductError> {
        Ok(self.product_repo.list().await?)
    }

    pub async fn update(
        &self,
        id: &ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        self.product_repo
            .update(id, update)
            .await
            .map_err(|e| ProductError::from_repo(id, e))
    }

    pub async fn delete(&self, id: &ProductId) -> Result<(), ProductError> {
        self.product_repo
            .delete(id)
            .await
            .map_err(|e| ProductError::from_repo(id, e))?;
        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }
}
