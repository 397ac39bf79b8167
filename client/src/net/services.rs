//! Seams between UI workflows and the external services.
//!
//! Workflows (`util::intake`, address autocomplete) are written against these
//! traits so tests can swap in in-memory fakes. Browser futures are not
//! `Send`, hence `?Send`.

use async_trait::async_trait;

use super::error::ApiError;
use super::types::{AddressSuggestion, NewClientRow};

/// Creates login identities.
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Register `email` with `password`, returning the new identity id.
    async fn sign_up(&self, email: &str, password: &str) -> Result<String, ApiError>;
}

/// Writes client rows.
#[async_trait(?Send)]
pub trait ClientStore {
    async fn insert_client(&self, row: &NewClientRow) -> Result<(), ApiError>;
}

/// Free-text address lookup.
#[async_trait(?Send)]
pub trait AddressSearch {
    async fn search(&self, query: &str) -> Result<Vec<AddressSuggestion>, ApiError>;
}
