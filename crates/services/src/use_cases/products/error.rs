//! Product and stock operation errors.

use storefront_domain::ProductId;

use crate::infrastructure::ports::RepoError;
use crate::use_cases::validation::ValidationError;

/// Errors that can occur during product operations.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Insufficient stock for product {product_id}")]
    InsufficientStock { product_id: ProductId },
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl ProductError {
    pub(crate) fn from_repo(id: &ProductId, err: RepoError) -> Self {
        if err.is_not_found() {
            Self::NotFound(id.clone())
        } else {
            Self::Repo(err)
        }
    }
}
