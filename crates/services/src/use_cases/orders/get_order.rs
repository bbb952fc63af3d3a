//! Get order use case.

use std::sync::Arc;
use storefront_domain::{Order, OrderId};

use crate::infrastructure::ports::OrderRepo;

use super::error::OrderError;

pub struct GetOrder {
    order_repo: Arc<dyn OrderRepo>,
}

impl GetOrder {
    pub fn new(order_repo: Arc<dyn OrderRepo>) -> Self {
        Self { order_repo }
    }

    /// Malformed and unknown identifiers both yield `OrderError::NotFound`.
    pub async fn execute(&self, id: &OrderId) -> Result<Order, OrderError> {
        self.order_repo
            .get(id)
            .await
            .map_err(|e| OrderError::from_repo(id, e))
    }
}
