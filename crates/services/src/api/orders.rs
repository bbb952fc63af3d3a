//! Order service HTTP routes.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use storefront_domain::{Order, OrderId, OrderItem, UserId};
use storefront_shared::{
    CreateOrderRequest, CreateOrderResponse, ListOrdersQuery, OrderStatusResponse,
    UpdateOrderStatusRequest,
};

use super::{health, ApiError};
use crate::app::OrderApp;

const TOTAL_COUNT: &str = "x-total-count";

/// Create all order service routes.
pub fn routes() -> Router<Arc<OrderApp>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/orders", get(list_orders).post(create_order))
        .route("/api/orders/{id}", get(get_order).patch(update_status))
}

/// 200 body for GET /orders.
#[derive(Debug, Serialize)]
struct ListOrdersResponse {
    items: Vec<Order>,
    total: u64,
    page: u64,
    page_size: u64,
}

async fn create_order(
    State(app): State<Arc<OrderApp>>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let items = req
        .items
        .into_iter()
        .map(|item| OrderItem::new(item.product_id, item.quantity, item.price_cents))
        .collect();

    let id = app
        .use_cases
        .create
        .execute(UserId::new(req.user_id), items)
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/orders/{}", id))],
        Json(CreateOrderResponse { id: id.into_inner() }),
    ))
}

async fn get_order(
    State(app): State<Arc<OrderApp>>,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    let order = app.use_cases.get.execute(&OrderId::new(id)).await?;
    Ok(Json(order))
}

async fn update_status(
    State(app): State<Arc<OrderApp>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateOrderStatusRequest>, JsonRejection>,
) -> Result<Json<OrderStatusResponse>, ApiError> {
    let Json(req) = payload?;
    let id = OrderId::new(id);
    let status = app.use_cases.update_status.execute(&id, &req.status).await?;

    Ok(Json(OrderStatusResponse {
        id: id.into_inner(),
        status: status.to_string(),
    }))
}

async fn list_orders(
    State(app): State<Arc<OrderApp>>,
    query: Result<Query<ListOrdersQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let user_id = query
        .user_id
        .filter(|u| !u.trim().is_empty())
        .map(UserId::new)
        .ok_or_else(|| ApiError::BadRequest("user_id is required".to_string()))?;

    let page = app
        .use_cases
        .list
        .execute(
            &user_id,
            lenient_i64(query.page.as_deref()),
            lenient_i64(query.page_size.as_deref()),
        )
        .await?;

    let body = ListOrdersResponse {
        total: page.total,
        page: page.request.page(),
        page_size: page.request.page_size(),
        items: page.items,
    };
    Ok(([(TOTAL_COUNT, body.total.to_string())], Json(body)))
}

/// Parse a paging parameter; anything unparsable reads as 0 so the page
/// window falls back to its defaults.
fn lenient_i64(value: Option<&str>) -> i64 {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or_default()
}
