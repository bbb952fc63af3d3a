//! API layer - HTTP entry points for both services.

pub mod error;
pub mod orders;
pub mod products;

pub use error::ApiError;

async fn health() -> &'static str {
    "OK"
}
