//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod config;
pub mod inventory_client;
pub mod mongo;
pub mod ports;
pub mod runtime;
