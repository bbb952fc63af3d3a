//! Inventory service HTTP client
//!
//! Implements the InventoryPort trait for the order service. The inventory
//! service only reports success or failure; anything other than 200/201 is
//! treated as a refusal, and no response at all as unavailability.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use storefront_domain::ReservationLine;
use storefront_shared::{ReserveItemData, ReserveStockRequest};

use crate::infrastructure::ports::{InventoryError, InventoryPort};

/// Default limit for one inventory round-trip.
pub const INVENTORY_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the inventory service API
#[derive(Clone)]
pub struct HttpInventoryClient {
    client: Client,
    base_url: String,
}

impl HttpInventoryClient {
    /// `base_url` includes the service's `/api` prefix.
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, INVENTORY_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn post_lines(&self, path: &str, lines: &[ReservationLine]) -> Result<(), InventoryError> {
        let body = ReserveStockRequest {
            items: lines
                .iter()
                .map(|line| ReserveItemData {
                    product_id: line.product_id.to_string(),
                    quantity: line.quantity,
                })
                .collect(),
        };

        let response = self
            .client
            .post(format!("{}/{}", self.base_url, path))
            .json(&body)
            .send()
            .await
            .map_err(|e| InventoryError::Unavailable(e.to_string()))?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => Ok(()),
            status => {
                tracing::debug!(
                    path = path,
                    status = status.as_u16(),
                    "Inventory service refused request"
                );
                Err(InventoryError::Rejected {
                    status: status.as_u16(),
                })
            }
        }
    }
}

#[async_trait]
impl InventoryPort for HttpInventoryClient {
    async fn reserve(&self, lines: &[ReservationLine]) -> Result<(), InventoryError> {
        self.post_lines("products/reserve", lines).await
    }

    async fn release(&self, lines: &[ReservationLine]) -> Result<(), InventoryError> {
        self.post_lines("products/release", lines).await
    }
}
