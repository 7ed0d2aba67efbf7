//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid numeric or boolean values return `ConfigError::InvalidValue`.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_API_KEY, ENV_BASE_URL, ENV_SKIP_VERIFY, ENV_TIMEOUT};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
///
/// Values already set through builder methods are left untouched.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(key) = env_var_or_none(ENV_API_KEY) {
        loader.set_api_key_if_unset(SecretString::new(key.into()));
    }
    if let Some(url) = env_var_or_none(ENV_BASE_URL) {
        loader.set_base_url_if_unset(url);
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number of seconds".to_string(),
        })?;
        loader.set_timeout_if_unset(Duration::from_secs(secs));
    }
    if let Some(skip) = env_var_or_none(ENV_SKIP_VERIFY) {
        let skip: bool = skip.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_SKIP_VERIFY.to_string(),
            message: "must be true or false".to_string(),
        })?;
        loader.set_skip_verify_if_unset(skip);
    }
    Ok(())
}
