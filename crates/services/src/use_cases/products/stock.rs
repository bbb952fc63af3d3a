//! Stock reservation and release use cases.
//!
//! A reservation is all-or-nothing: each line is taken with a conditional
//! decrement, and if any line cannot be taken every line already taken in
//! the same request is put back before the failure is reported.

use std::sync::Arc;
use storefront_domain::ReservationLine;

use crate::infrastructure::ports::ProductRepo;
use crate::use_cases::validation::{require_any, require_non_empty, require_positive, ValidationError};

use super::error::ProductError;

fn validate(lines: &[ReservationLine]) -> Result<(), ValidationError> {
    require_any(lines, "items")?;
    for line in lines {
        require_non_empty(line.product_id.as_str(), "product_id")?;
        require_positive(line.quantity, "quantity")?;
    }
    Ok(())
}

/// Reserve stock use case.
pub struct ReserveStock {
    product_repo: Arc<dyn ProductRepo>,
}

impl ReserveStock {
    pub fn new(product_repo: Arc<dyn ProductRepo>) -> Self {
        Self { product_repo }
    }

    /// Take stock for every line, or for none of them.
    ///
    /// # Returns
    /// * `Ok(lines)` - Every line was reserved
    /// * `Err(ProductError::InsufficientStock)` - A product is unknown or short; nothing stays reserved
    pub async fn execute(
        &self,
        lines: Vec<ReservationLine>,
    ) -> Result<Vec<ReservationLine>, ProductError> {
        validate(&lines)?;

        let mut taken: Vec<&ReservationLine> = Vec::with_capacity(lines.len());
        for line in &lines {
            match self.product_repo.take_stock(line).await {
                Ok(true) => taken.push(line),
                Ok(false) => {
                    tracing::info!(
                        product_id = %line.product_id,
                        quantity = line.quantity,
                        "Insufficient stock; rolling back reservation"
                    );
                    self.roll_back(&taken).await;
                    return Err(ProductError::InsufficientStock {
                        product_id: line.product_id.clone(),
                    });
                }
                Err(e) => {
                    tracing::error!(product_id = %line.product_id, error = %e, "Stock update failed");
                    self.roll_back(&taken).await;
                    return Err(ProductError::Repo(e));
                }
            }
        }

        tracing::debug!(items = lines.len(), "Stock reserved");
        Ok(lines)
    }

    async fn roll_back(&self, taken: &[&ReservationLine]) {
        for line in taken {
            match self.product_repo.restore_stock(line).await {
                Ok(true) => {}
                Ok(false) => {
                    tracing::warn!(product_id = %line.product_id, "Product vanished during rollback")
                }
                Err(e) => tracing::error!(
                    product_id = %line.product_id,
                    quantity = line.quantity,
                    error = %e,
                    "Failed to restore stock during rollback"
                ),
            }
        }
    }
}

/// Release stock use case.
pub struct ReleaseStock {
    product_repo: Arc<dyn ProductRepo>,
}

impl ReleaseStock {
    pub fn new(product_repo: Arc<dyn ProductRepo>) -> Self {
        Self { product_repo }
    }

    /// Give stock back, line by line.
    ///
    /// Stops at the first unknown product; lines before it stay released.
    pub async fn execute(
        &self,
        lines: Vec<ReservationLine>,
    ) -> Result<Vec<ReservationLine>, ProductError> {
        validate(&lines)?;

        for line in &lines {
            if !self.product_repo.restore_stock(line).await? {
                return Err(ProductError::NotFound(line.product_id.clone()));
            }
        }

        tracing::info!(items = lines.len(), "Stock released");
        Ok(lines)
    }
}
