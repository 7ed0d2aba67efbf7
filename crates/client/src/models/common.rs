//! Shared response types.

use serde::{Deserialize, Serialize};

/// Error envelope returned by the API on non-2xx responses.
///
/// ```json
/// {"error": {"title": "The API key provided is invalid"}}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorDetail {
    pub title: String,
}

impl ApiErrorBody {
    /// Extract the error title from a raw body, if it is a non-empty error envelope.
    pub fn title_from(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .map(|b| b.error.title)
            .filter(|t| !t.is_empty())
    }
}
