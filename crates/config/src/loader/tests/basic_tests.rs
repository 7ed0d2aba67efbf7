//! Builder-only tests (no environment access).

use std::time::Duration;

use crate::constants::DEFAULT_BASE_URL;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use secrecy::ExposeSecret;

#[test]
fn test_build_requires_api_key() {
    let result = ConfigLoader::new().build();
    assert!(matches!(result, Err(ConfigError::MissingApiKey)));
}

#[test]
fn test_build_with_defaults() {
    let config = ConfigLoader::new()
        .with_api_key("1234".to_string())
        .build()
        .unwrap();

    assert_eq!(config.api_key.expose_secret(), "1234");
    assert_eq!(config.connection.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.connection.timeout, Duration::from_secs(30));
    assert!(!config.connection.skip_verify);
}

#[test]
fn test_build_with_overrides() {
    let config = ConfigLoader::new()
        .with_api_key("1234".to_string())
        .with_base_url("http://localhost:9000/".to_string())
        .with_timeout(Duration::from_secs(5))
        .with_skip_verify(true)
        .build()
        .unwrap();

    assert_eq!(config.connection.base_url, "http://localhost:9000");
    assert_eq!(config.connection.timeout, Duration::from_secs(5));
    assert!(config.connection.skip_verify);
}

#[test]
fn test_build_rejects_zero_timeout() {
    let result = ConfigLoader::new()
        .with_api_key("1234".to_string())
        .with_timeout(Duration::ZERO)
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_build_rejects_invalid_base_url() {
    let result = ConfigLoader::new()
        .with_api_key("1234".to_string())
        .with_base_url("not a url".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
}

#[test]
fn test_api_key_is_not_validated() {
    let config = ConfigLoader::new()
        .with_api_key("definitely not a real key".to_string())
        .build()
        .unwrap();
    assert_eq!(config.api_key.expose_secret(), "definitely not a real key");
}
