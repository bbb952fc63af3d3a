//! Inventory service HTTP routes.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use storefront_domain::{NewProduct, Product, ProductId, ProductUpdate, ReservationLine};
use storefront_shared::{ReserveItemData, ReserveStockRequest, ReserveStockResponse};

use super::{health, ApiError};
use crate::app::InventoryApp;

/// Create all inventory service routes.
pub fn routes() -> Router<Arc<InventoryApp>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/{id}",
            get(get_product).patch(update_product).delete(delete_product),
        )
        .route("/api/products/reserve", post(reserve_stock))
        .route("/api/products/release", post(release_stock))
}

async fn list_products(State(app): State<Arc<InventoryApp>>) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(app.use_cases.ops.list().await?))
}

async fn create_product(
    State(app): State<Arc<InventoryApp>>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(product) = payload?;
    let product = app.use_cases.ops.create(product).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

async fn get_product(
    State(app): State<Arc<InventoryApp>>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(app.use_cases.ops.get(&ProductId::new(id)).await?))
}

async fn update_product(
    State(app): State<Arc<InventoryApp>>,
    Path(id): Path<String>,
    payload: Result<Json<ProductUpdate>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let Json(update) = payload?;
    let product = app
        .use_cases
        .ops
        .update(&ProductId::new(id), update)
        .await?;
    Ok(Json(product))
}

async fn delete_product(
    State(app): State<Arc<InventoryApp>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    app.use_cases.ops.delete(&ProductId::new(id)).await?;
    Ok(StatusCode::OK)
}

async fn reserve_stock(
    State(app): State<Arc<InventoryApp>>,
    payload: Result<Json<ReserveStockRequest>, JsonRejection>,
) -> Result<Json<ReserveStockResponse>, ApiError> {
    let Json(req) = payload?;
    let reserved = app.use_cases.reserve.execute(to_lines(req)).await?;
    Ok(Json(to_response(reserved)))
}

async fn release_stock(
    State(app): State<Arc<InventoryApp>>,
    payload: Result<Json<ReserveStockRequest>, JsonRejection>,
) -> Result<Json<ReserveStockResponse>, ApiError> {
    let Json(req) = payload?;
    let released = app.use_cases.release.execute(to_lines(req)).await?;
    Ok(Json(to_response(released)))
}

fn to_lines(req: ReserveStockRequest) -> Vec<ReservationLine> {
    req.items
        .into_iter()
        .map(|item| ReservationLine::new(item.product_id, item.quantity))
        .collect()
}

fn to_response(lines: Vec<ReservationLine>) -> ReserveStockResponse {
    ReserveStockResponse {
        reserved: lines
            .into_iter()
            .map(|line| ReserveItemData {
                product_id: line.product_id.into_inner(),
                quantity: line.quantity,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockProductRepo, RepoError};
    use crate::test_fixtures::sample_product;
    use axum::body::Body;
    use axum::http::{header, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn router(repo: MockProductRepo) -> Router {
        routes().with_state(Arc::new(InventoryApp::new(Arc::new(repo))))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_returns_201_with_the_stored_product() {
        let mut repo = MockProductRepo::new();
        repo.expect_create()
            .withf(|product| product.name == "Desk lamp" && product.stock == 12)
            .times(1)
            .returning(|_| Ok(sample_product("p1")));

        let response = router(repo)
            .oneshot(json_request(
                "POST",
                "/api/products",
                json!({ "name": "Desk lamp", "price_cents": 4500, "stock": 12 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await["id"], "p1");
    }

    #[tokio::test]
    async fn list_returns_every_product() {
        let mut repo = MockProductRepo::new();
        repo.expect_list()
            .returning(|| Ok(vec![sample_product("p1"), sample_product("p2")]));

        let response = router(repo)
            .oneshot(Request::builder().uri("/api/products").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn missing_product_is_404() {
        let mut repo = MockProductRepo::new();
        repo.expect_get()
            .returning(|id| Err(RepoError::not_found("Product", id)));

        let response = router(repo)
            .oneshot(Request::builder().uri("/api/products/zzz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_of_missing_product_is_404() {
        let mut repo = MockProductRepo::new();
        repo.expect_delete()
            .returning(|id| Err(RepoError::not_found("Product", id)));

        let request = Request::builder()
            .method("DELETE")
            .uri("/api/products/p9")
            .body(Body::empty())
            .unwrap();
        let response = router(repo).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn reserve_answers_with_reserved_lines() {
        let mut repo = MockProductRepo::new();
        repo.expect_take_stock().times(2).returning(|_| Ok(true));

        let response = router(repo)
            .oneshot(json_request(
                "POST",
                "/api/products/reserve",
                json!({ "items": [
                    { "product_id": "p1", "quantity": 2 },
                    { "product_id": "p2", "quantity": 1 }
                ] }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "reserved": [
                { "product_id": "p1", "quantity": 2 },
                { "product_id": "p2", "quantity": 1 }
            ] })
        );
    }

    #[tokio::test]
    async fn reserve_conflicts_on_short_stock() {
        let mut repo = MockProductRepo::new();
        repo.expect_take_stock().returning(|_| Ok(false));
        repo.expect_restore_stock().never();

        let response = router(repo)
            .oneshot(json_request(
                "POST",
                "/api/products/reserve",
                json!({ "items": [{ "product_id": "p1", "quantity": 99 }] }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("p1"));
    }

    #[tokio::test]
    async fn reserve_rejects_empty_requests() {
        let response = router(MockProductRepo::new())
            .oneshot(json_request("POST", "/api/products/reserve", json!({ "items": [] })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn release_of_unknown_product_is_404() {
        let mut repo = MockProductRepo::new();
        repo.expect_restore_stock().returning(|_| Ok(false));

        let response = router(repo)
            .oneshot(json_request(
                "POST",
                "/api/products/release",
                json!({ "items": [{ "product_id": "p1", "quantity": 1 }] }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
