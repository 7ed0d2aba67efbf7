//! Error types for the New Relic client.
//!
//! Every public operation returns one of three failure kinds:
//! - transport failures (connect, DNS, TLS, timeout) as [`ClientError::HttpError`]
//! - non-2xx responses as [`ClientError::ApiError`]
//! - bodies that are not the expected JSON as [`ClientError::Decode`]
//!
//! Requests that cannot be built (bad URL, bad header value) fail before any
//! I/O with [`ClientError::InvalidUrl`] or [`ClientError::InvalidRequest`].
//!
//! A failed call never yields a zero-valued success record.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during New Relic client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure: connection refused, DNS, TLS, or timeout.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The API answered with a status outside 200-299.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        /// The `error.title` from the response envelope, or the raw body.
        message: String,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// The response body was empty, not JSON, or not the expected shape.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request could not be assembled, e.g. the API key is not a valid
    /// header value. Nothing was sent.
    #[error("Failed to build request: {0}")]
    InvalidRequest(#[source] reqwest::Error),

    /// The base URL or endpoint could not be turned into a request URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// No API key was supplied to the builder.
    #[error("API key is required")]
    MissingApiKey,
}

impl ClientError {
    /// True for connection, DNS, TLS and timeout failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::HttpError(_))
    }

    /// True when the request hit the configured timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::HttpError(e) if e.is_timeout())
    }

    /// True when the response body could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// HTTP status of an [`ClientError::ApiError`], if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error indicates a rejected API key.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}
