//! HTTP error mapping.
//!
//! Every failure leaves the service as `{"error": "<message>"}` with the
//! status code matching the error kind. Store and driver details are logged
//! here and kept out of response bodies.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use storefront_shared::ErrorResponse;

use crate::use_cases::{OrderError, ProductError};

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Conflict(msg)
            | ApiError::Internal(msg) => msg,
        };
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::Validation(_) => ApiError::BadRequest(e.to_string()),
            OrderError::NotFound(_) => ApiError::NotFound(e.to_string()),
            OrderError::StockInsufficient => ApiError::Conflict(e.to_string()),
            OrderError::InventoryUnavailable(_) => {
                tracing::error!(error = %e, "Order request failed");
                ApiError::Internal("Inventory service unavailable".to_string())
            }
            OrderError::Repo(_) => {
                tracing::error!(error = %e, "Order request failed");
                ApiError::Internal("Internal error".to_string())
            }
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::Validation(_) => ApiError::BadRequest(e.to_string()),
            ProductError::NotFound(_) => ApiError::NotFound(e.to_string()),
            ProductError::InsufficientStock { .. } => ApiError::Conflict(e.to_string()),
            ProductError::Repo(_) => {
                tracing::error!(error = %e, "Product request failed");
                ApiError::Internal("Internal error".to_string())
            }
        }
    }
}
