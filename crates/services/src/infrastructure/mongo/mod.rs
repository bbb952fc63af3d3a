//! MongoDB implementations.

use mongodb::{Client, Database};

mod helpers;

mod order_repo;
mod product_repo;

#[cfg(test)]
mod integration_tests;

pub use order_repo::MongoOrderRepo;
pub use product_repo::MongoProductRepo;

/// Parse `uri` and open `database`.
///
/// The driver connects lazily, so an unreachable server surfaces on the
/// first repository call rather than here.
pub async fn connect(uri: &str, database: &str) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;
    Ok(client.database(database))
}
