//! Update order status use case.

use std::sync::Arc;
use storefront_domain::{OrderId, OrderStatus};

use crate::infrastructure::ports::OrderRepo;
use crate::use_cases::validation::ValidationError;

use super::error::OrderError;

pub struct UpdateOrderStatus {
    order_repo: Arc<dyn OrderRepo>,
}

impl UpdateOrderStatus {
    pub fn new(order_repo: Arc<dyn OrderRepo>) -> Self {
        Self { order_repo }
    }

    /// Set the status of an order.
    ///
    /// Any known status may follow any other; only unknown names are refused.
    pub async fn execute(&self, id: &OrderId, status: &str) -> Result<OrderStatus, OrderError> {
        let status = status
            .parse::<OrderStatus>()
            .map_err(|e| ValidationError::invalid("status", e.to_string()))?;

        self.order_repo
            .update_status(id, status)
            .await
            .map_err(|e| OrderError::from_repo(id, e))?;

        tracing::info!(order_id = %id, status = %status, "Order status updated");
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockOrderRepo, RepoError};

    #[tokio::test]
    async fn known_status_is_written() {
        let mut order_repo = MockOrderRepo::new();
        order_repo
            .expect_update_status()
            .withf(|id, status| id.as_str() == "o1" && *status == OrderStatus::Completed)
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = UpdateOrderStatus::new(Arc::new(order_repo));
        let status = use_case.execute(&OrderId::new("o1"), "completed").await.unwrap();

        assert_eq!(status, OrderStatus::Completed);
    }

    #[tokio::test]
    async fn terminal_status_can_still_change() {
        let mut order_repo = MockOrderRepo::new();
        order_repo
            .expect_update_status()
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = UpdateOrderStatus::new(Arc::new(order_repo));
        assert!(use_case.execute(&OrderId::new("o1"), "pending").await.is_ok());
    }

    #[tokio::test]
    async fn unknown_status_leaves_record_untouched() {
        let mut order_repo = MockOrderRepo::new();
        order_repo.expect_update_status().never();

        let use_case = UpdateOrderStatus::new(Arc::new(order_repo));
        let result = use_case.execute(&OrderId::new("o1"), "shipped").await;

        assert!(matches!(result, Err(OrderError::Validation(_))));
    }

    #[tokio::test]
    async fn unmatched_id_is_not_found() {
        let mut order_repo = MockOrderRepo::new();
        order_repo
            .expect_update_status()
            .returning(|id, _| Err(RepoError::not_found("Order", id)));

        let use_case = UpdateOrderStatus::new(Arc::new(order_repo));
        let result = use_case.execute(&OrderId::new("o404"), "cancelled").await;

        assert!(matches!(result, Err(OrderError::NotFound(_))));
    }
}
