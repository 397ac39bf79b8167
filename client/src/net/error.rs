//! Error type for calls to the auth, database and geocoding services.
//!
//! ERROR HANDLING
//! ==============
//! Provider-supplied messages are kept verbatim in `Rejected` so forms can
//! show them to the user unchanged. Everything else collapses to a short
//! status or transport description.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of an external service call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// Non-success status without a readable provider message.
    #[error("request failed: {0}")]
    Status(u16),
    /// The provider rejected the request and said why.
    #[error("{0}")]
    Rejected(String),
    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Browser-only call attempted outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-success response from its status and raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        match provider_error_message(body) {
            Some(message) => Self::Rejected(message),
            None => Self::Status(status),
        }
    }
}

/// Pull the human-readable message out of an auth or PostgREST error body.
///
/// GoTrue uses `msg` or `error_description`; PostgREST uses `message`;
/// older endpoints use a bare `error` string.
#[must_use]
pub fn provider_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["msg", "error_description", "message", "error"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .find(|message| !message.is_empty())
        .map(str::to_owned)
}
