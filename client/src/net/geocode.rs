//! Address search against a Nominatim-compatible geocoder.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: searches return [`ApiError::Unavailable`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "geocode_test.rs"]
mod geocode_test;

use async_trait::async_trait;

use super::error::ApiError;
use super::services::AddressSearch;
use super::types::{AddressSuggestion, GeocodePlace};

/// Maximum candidates requested per search.
pub const SEARCH_RESULT_LIMIT: u8 = 5;

/// Geocoding client for one base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Geocoder {
    base_url: String,
}

impl Geocoder {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

/// Query parameters for one search.
fn search_params(query: &str) -> [(&'static str, String); 4] {
    [
        ("format", "json".to_owned()),
        ("addressdetails", "0".to_owned()),
        ("limit", SEARCH_RESULT_LIMIT.to_string()),
        ("q", query.trim().to_owned()),
    ]
}

/// Decode a search response body into suggestions.
pub(crate) fn parse_search_response(body: &str) -> Result<Vec<AddressSuggestion>, ApiError> {
    let places: Vec<GeocodePlace> = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(places.into_iter().map(AddressSuggestion::from).collect())
}

#[async_trait(?Send)]
impl AddressSearch for Geocoder {
    async fn search(&self, query: &str) -> Result<Vec<AddressSuggestion>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let params = search_params(query);
            let resp = gloo_net::http::Request::get(&self.search_url())
                .query(params.iter().map(|(k, v)| (*k, v.as_str())))
                .header("Accept", "application/json")
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            if !(200..300).contains(&status) {
                return Err(ApiError::from_response(status, &body));
            }
            parse_search_response(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.search_url(), search_params(query));
            Err(ApiError::Unavailable)
        }
    }
}
