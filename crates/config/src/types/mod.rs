//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the connection settings and the top-level `Config`.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from environment variables (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - The API key is always a `secrecy::SecretString` so it cannot leak through `Debug`.

pub(crate) mod connection;

pub use connection::{Config, ConnectionConfig};
