//! Request and response envelopes for the AnkiConnect protocol.

use serde::{Deserialize, Serialize};

/// Protocol version sent with every request.
pub(crate) const API_VERSION: u8 = 6;

/// The request envelope expected by AnkiConnect.
#[derive(Debug, Serialize)]
pub(crate) struct AnkiRequest<'a, T> {
    /// The action to perform.
    pub action: &'a str,
    /// The API version, always [`API_VERSION`].
    pub version: u8,
    /// Optional API key for authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<&'a str>,
    /// Parameters for the action, omitted when the action takes none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<T>,
}

impl<'a, T> AnkiRequest<'a, T> {
    pub fn new(action: &'a str, params: T, key: Option<&'a str>) -> Self {
        Self {
            action,
            version: API_VERSION,
            key,
            params: Some(params),
        }
    }

    pub fn without_params(action: &'a str, key: Option<&'a str>) -> AnkiRequest<'a, ()> {
        AnkiRequest {
            action,
            version: API_VERSION,
            key,
            params: None,
        }
    }
}

/// The response envelope returned by AnkiConnect.
///
/// `result` stays as raw JSON so the error can be inspected before the
/// result is decoded into the caller's type.
#[derive(Debug, Deserialize)]
pub(crate) struct AnkiResponse {
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}
