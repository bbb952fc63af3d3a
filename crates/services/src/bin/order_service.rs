//! Order service - Main entry point.

use std::sync::Arc;

use tower_http::trace::TraceLayer;

use storefront_services::api;
use storefront_services::infrastructure::{
    clock::SystemClock,
    config::OrderServiceConfig,
    inventory_client::HttpInventoryClient,
    mongo::{self, MongoOrderRepo},
    ports::ClockPort,
    runtime::{init_tracing, shutdown_signal},
};
use storefront_services::OrderApp;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing("storefront_services=debug,order_service=debug,tower_http=debug");
    tracing::info!("Starting order service");

    let config = OrderServiceConfig::from_env()?;

    tracing::info!(database = %config.mongo.database, "Connecting to MongoDB");
    let db = mongo::connect(&config.mongo.uri, &config.mongo.database).await?;

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
    let order_repo = Arc::new(MongoOrderRepo::new(&db, clock));

    tracing::info!(url = %config.inventory_base_url, "Using inventory service");
    let inventory = Arc::new(HttpInventoryClient::new(&config.inventory_base_url));

    let app = Arc::new(OrderApp::new(order_repo, inventory));

    let router = api::orders::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Order service stopped");
    Ok(())
}
