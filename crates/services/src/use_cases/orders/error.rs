//! Order workflow errors.

use storefront_domain::OrderId;

use crate::infrastructure::ports::RepoError;
use crate::use_cases::validation::ValidationError;

/// Errors that can occur during order operations.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Order not found: {0}")]
    NotFound(OrderId),
    #[error("Insufficient stock for one or more items")]
    StockInsufficient,
    #[error("Inventory service unavailable: {0}")]
    InventoryUnavailable(String),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl OrderError {
    /// Translate a repository not-found into the workflow's own not-found.
    pub(crate) fn from_repo(id: &OrderId, err: RepoError) -> Self {
        if err.is_not_found() {
            Self::NotFound(id.clone())
        } else {
            Self::Repo(err)
        }
    }
}
