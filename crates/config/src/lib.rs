//! Configuration management for the New Relic API client.
//!
//! This crate provides the connection settings, API key handling, and
//! environment-based loader used to construct a client.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, ConnectionConfig};
