//! List orders use case.

use std::sync::Arc;
use storefront_domain::{Order, Page, PageRequest, UserId};

use crate::infrastructure::ports::OrderRepo;
use crate::use_cases::validation::require_non_empty;

use super::error::OrderError;

pub struct ListOrders {
    order_repo: Arc<dyn OrderRepo>,
}

impl ListOrders {
    pub fn new(order_repo: Arc<dyn OrderRepo>) -> Self {
        Self { order_repo }
    }

    /// One page of the user's orders, newest first.
    ///
    /// Out-of-range `page` and `page_size` are clamped to their defaults.
    pub async fn execute(
        &self,
        user_id: &UserId,
        page: i64,
        page_size: i64,
    ) -> Result<Page<Order>, OrderError> {
        require_non_empty(user_id.as_str(), "user_id")?;
        let request = PageRequest::new(page, page_size);
        Ok(self.order_repo.list_by_user(user_id, request).await?)
    }
}
