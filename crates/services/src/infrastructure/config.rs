//! Service configuration
//!
//! Each binary builds its config once at startup and hands the pieces to the
//! components that need them.

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};

/// Document store connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoConfig {
    /// Connection URI
    pub uri: String,
    /// Database name
    pub database: String,
}

/// Listen address settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

/// Order service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderServiceConfig {
    pub mongo: MongoConfig,
    pub server: ServerConfig,
    /// Base URL of the inventory service, including its `/api` prefix
    pub inventory_base_url: String,
}

impl OrderServiceConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            mongo: MongoConfig {
                uri: lookup("MONGO_URI")
                    .unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
                database: lookup("MONGO_DB").unwrap_or_else(|| "orders".to_string()),
            },
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: lookup("LISTEN_PORT")
                    .unwrap_or_else(|| "8002".to_string())
                    .parse()
                    .context("LISTEN_PORT must be a valid port number")?,
            },
            inventory_base_url: lookup("INVENTORY_URL")
                .unwrap_or_else(|| "http://localhost:8001/api".to_string()),
        })
    }
}

/// Inventory service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryServiceConfig {
    pub mongo: MongoConfig,
    pub server: ServerConfig,
}

impl InventoryServiceConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            mongo: MongoConfig {
                uri: lookup("MONGO_URI")
                    .unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
                database: lookup("MONGO_DB").unwrap_or_else(|| "inventory_db".to_string()),
            },
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: lookup("SERVER_PORT")
                    .unwrap_or_else(|| "8001".to_string())
                    .parse()
                    .context("SERVER_PORT must be a valid port number")?,
            },
        })
    }
}
