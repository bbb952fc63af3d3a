//! Application state and composition.
//!
//! Each binary builds one of these once at startup and hands it to its
//! router as `State<Arc<_>>`.

use std::sync::Arc;

use crate::infrastructure::ports::{InventoryPort, OrderRepo, ProductRepo};
use crate::use_cases::{OrderUseCases, ProductUseCases};

/// Order service state.
pub struct OrderApp {
    pub use_cases: OrderUseCases,
}

impl OrderApp {
    pub fn new(order_repo: Arc<dyn OrderRepo>, inventory: Arc<dyn InventoryPort>) -> Self {
        Self {
            use_cases: OrderUseCases::from_ports(order_repo, inventory),
        }
    }
}

/// Inventory service state.
pub struct InventoryApp {
    pub use_cases: ProductUseCases,
}

impl InventoryApp {
    pub fn new(product_repo: Arc<dyn ProductRepo>) -> Self {
        Self {
            use_cases: ProductUseCases::from_repo(product_repo),
        }
    }
}
