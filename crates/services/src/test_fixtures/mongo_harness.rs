//! MongoDB test harness for repository integration tests.
//!
//! Starts a throwaway `mongo` container per test and hands out databases
//! once the server answers a ping.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::Database;
use testcontainers::{core::WaitFor, runners::AsyncRunner, ContainerAsync, GenericImage};
use tokio::time::sleep;

use crate::infrastructure::mongo;

const MONGO_PORT: u16 = 27017;

/// Keeps the container alive for as long as the harness is in scope.
pub struct MongoTestHarness {
    _container: ContainerAsync<GenericImage>,
    uri: String,
}

impl MongoTestHarness {
    /// Start a MongoDB container.
    ///
    /// # Errors
    ///
    /// Returns an error if the server never becomes reachable.
    pub async fn start() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let container: ContainerAsync<GenericImage> = mongo_image().start().await;
        let port = container.get_host_port_ipv4(MONGO_PORT).await;
        let uri = format!(
            "mongodb://127.0.0.1:{port}/?directConnection=true&serverSelectionTimeoutMS=2000"
        );

        // Fail here rather than inside the first repository call
        connect_with_retry(&uri, "admin").await?;

        Ok(Self {
            _container: container,
            uri,
        })
    }

    /// Open `name` on the running server.
    pub async fn database(
        &self,
        name: &str,
    ) -> Result<Database, Box<dyn std::error::Error + Send + Sync>> {
        connect_with_retry(&self.uri, name).await
    }
}

/// Pinned MongoDB image; readiness is checked by [`connect_with_retry`].
pub fn mongo_image() -> GenericImage {
    GenericImage::new("mongo", "7.0")
        .with_exposed_port(MONGO_PORT)
        .with_wait_for(WaitFor::seconds(2))
}

/// Connect and ping with exponential backoff (250ms doubling, capped at 2s).
pub async fn connect_with_retry(
    uri: &str,
    database: &str,
) -> Result<Database, Box<dyn std::error::Error + Send + Sync>> {
    let max_attempts = 30;
    let max_delay = Duration::from_secs(2);

    let mut delay = Duration::from_millis(250);
    let mut last_err: Option<String> = None;

    for attempt in 1..=max_attempts {
        match mongo::connect(uri, database).await {
            Ok(db) => match db.run_command(doc! { "ping": 1 }).await {
                Ok(_) => {
                    tracing::info!(attempt, uri, "MongoDB connection established");
                    return Ok(db);
                }
                Err(e) => last_err = Some(format!("ping failed: {e}")),
            },
            Err(e) => last_err = Some(e.to_string()),
        }

        tracing::debug!(
            attempt,
            delay_ms = delay.as_millis(),
            error = last_err.as_deref().unwrap_or("unknown"),
            "Retrying MongoDB connection"
        );
        sleep(delay).await;
        delay = std::cmp::min(delay.saturating_mul(2), max_delay);
    }

    Err(format!(
        "Failed to connect to MongoDB at {uri} after {max_attempts} attempts: {last_err:?}"
    )
    .into())
}
