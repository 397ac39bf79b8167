//! REST helpers for the Lifeline host server (same origin).
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a missing config
//! degrades the UI to placeholders without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::PublicConfig;

/// Path of the public service-config endpoint.
pub const CONFIG_ENDPOINT: &str = "/api/config";

fn config_request_failed_message(status: u16) -> String {
    format!("config request failed: {status}")
}

/// Fetch service URLs and the public anon key from `/api/config`.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a
/// non-OK status, or the body is not a `PublicConfig`.
pub async fn fetch_public_config() -> Result<PublicConfig, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CONFIG_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Rejected(config_request_failed_message(resp.status())));
        }
        resp.json::<PublicConfig>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config_request_failed_message;
        Err(ApiError::Unavailable)
    }
}
