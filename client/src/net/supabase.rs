//! REST client for the hosted auth (GoTrue) and database (PostgREST) APIs.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: every call returns [`ApiError::Unavailable`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Signup and row insert are deliberately separate calls; callers sequence
//! them (see `util::intake`). No retries and no timeouts: a hung request
//! only blocks the caller's loading indicator.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "supabase_test.rs"]
mod supabase_test;

use async_trait::async_trait;
use serde::Deserialize;

use super::error::ApiError;
use super::services::{ClientStore, IdentityProvider};
use super::types::{AlertRecord, ClientRecord, LatLng, NewClientRow, PublicConfig};

/// Auth + database client bound to one project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupabaseClient {
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    #[must_use]
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), anon_key: anon_key.to_owned() }
    }

    #[must_use]
    pub fn from_config(config: &PublicConfig) -> Self {
        Self::new(&config.supabase_url, &config.supabase_anon_key)
    }

    fn signup_url(&self) -> String {
        format!("{}/auth/v1/signup", self.base_url)
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    fn clients_query_url(&self) -> String {
        format!("{}?select=*", self.table_url("clients"))
    }

    fn alerts_query_url(&self) -> String {
        format!("{}?select=*&order=created_at.desc", self.table_url("alerts"))
    }

    fn client_row_url(&self, client_id: &str) -> String {
        format!("{}?id=eq.{client_id}", self.table_url("clients"))
    }

    #[cfg(feature = "hydrate")]
    fn authorized(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        builder
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
    }

    /// Load every client row.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the rows cannot be decoded.
    pub async fn fetch_clients(&self) -> Result<Vec<ClientRecord>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .authorized(gloo_net::http::Request::get(&self.clients_query_url()))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            decode_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.clients_query_url();
            Err(ApiError::Unavailable)
        }
    }

    /// Load every alert row, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the rows cannot be decoded.
    pub async fn fetch_alerts(&self) -> Result<Vec<AlertRecord>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .authorized(gloo_net::http::Request::get(&self.alerts_query_url()))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            decode_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.alerts_query_url();
            Err(ApiError::Unavailable)
        }
    }

    /// Store a client's latest position.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the row update is rejected.
    pub async fn update_client_location(&self, client_id: &str, location: LatLng) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "location": location });
            let resp = self
                .authorized(gloo_net::http::Request::patch(&self.client_row_url(client_id)))
                .header("Prefer", "return=minimal")
                .json(&payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            expect_success(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.client_row_url(client_id), location);
            Err(ApiError::Unavailable)
        }
    }
}

#[async_trait(?Send)]
impl IdentityProvider for SupabaseClient {
    async fn sign_up(&self, email: &str, password: &str) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "email": email, "password": password });
            let resp = gloo_net::http::Request::post(&self.signup_url())
                .header("apikey", &self.anon_key)
                .json(&payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            if !(200..300).contains(&status) {
                return Err(ApiError::from_response(status, &body));
            }
            parse_signup_response(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.signup_url(), email, password);
            Err(ApiError::Unavailable)
        }
    }
}

#[async_trait(?Send)]
impl ClientStore for SupabaseClient {
    async fn insert_client(&self, row: &NewClientRow) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .authorized(gloo_net::http::Request::post(&self.table_url("clients")))
                .header("Prefer", "return=minimal")
                .json(row)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            expect_success(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.table_url("clients"), row);
            Err(ApiError::Unavailable)
        }
    }
}

#[derive(Debug, Deserialize)]
struct SignupUser {
    id: String,
}

#[derive(Debug, Deserialize)]
struct SignupResponse {
    id: Option<String>,
    user: Option<SignupUser>,
}

/// Extract the identity id from a signup response.
///
/// With email confirmation on, the body is the user object itself; with
/// auto-confirm it is a session whose `user` carries the id.
pub(crate) fn parse_signup_response(body: &str) -> Result<String, ApiError> {
    let parsed: SignupResponse = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    parsed
        .user
        .map(|user| user.id)
        .or(parsed.id)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::Decode("signup response carried no user id".to_owned()))
}

#[cfg(feature = "hydrate")]
async fn expect_success(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() {
        return Ok(());
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_response(status, &body))
}

#[cfg(feature = "hydrate")]
async fn decode_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_response(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
