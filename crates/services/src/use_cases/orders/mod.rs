//! Order use cases.
//!
//! Handles order creation against the inventory service plus order
//! lookups, listing and status changes.

use std::sync::Arc;

mod create_order;
mod error;
mod get_order;
mod list_orders;
mod update_status;

pub use create_order::CreateOrder;
pub use error::OrderError;
pub use get_order::GetOrder;
pub use list_orders::ListOrders;
pub use update_status::UpdateOrderStatus;

use crate::infrastructure::ports::{InventoryPort, OrderRepo};

/// Container for order use cases.
pub struct OrderUseCases {
    pub create: Arc<CreateOrder>,
    pub get: Arc<GetOrder>,
    pub list: Arc<ListOrders>,
    pub update_status: Arc<UpdateOrderStatus>,
}

impl OrderUseCases {
    pub fn new(
        create: Arc<CreateOrder>,
        get: Arc<GetOrder>,
        list: Arc<ListOrders>,
        update_status: Arc<UpdateOrderStatus>,
    ) -> Self {
        Self {
            create,
            get,
            list,
            update_status,
        }
    }

    /// Wire every order use case to the same ports.
    pub fn from_ports(order_repo: Arc<dyn OrderRepo>, inventory: Arc<dyn InventoryPort>) -> Self {
        Self::new(
            Arc::new(CreateOrder::new(order_repo.clone(), inventory)),
            Arc::new(GetOrder::new(order_repo.clone())),
            Arc::new(ListOrders::new(order_repo.clone())),
            Arc::new(UpdateOrderStatus::new(order_repo)),
        )
    }
}
