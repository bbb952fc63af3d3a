//! Inventory service - Main entry point.

use std::sync::Arc;

use tower_http::trace::TraceLayer;

use storefront_services::api;
use storefront_services::infrastructure::{
    config::InventoryServiceConfig,
    mongo::{self, MongoProductRepo},
    runtime::{init_tracing, shutdown_signal},
};
use storefront_services::InventoryApp;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing("storefront_services=debug,inventory_service=debug,tower_http=debug");
    tracing::info!("Starting inventory service");

    let config = InventoryServiceConfig::from_env()?;

    tracing::info!(database = %config.mongo.database, "Connecting to MongoDB");
    let db = mongo::connect(&config.mongo.uri, &config.mongo.database).await?;
    let app = Arc::new(InventoryApp::new(Arc::new(MongoProductRepo::new(&db))));

    let router = api::products::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Inventory service stopped");
    Ok(())
}
