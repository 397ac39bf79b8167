//! Client intake workflow: validate, create identity, insert row.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signup and row insert are two independent provider calls. They are not
//! transactional: if the insert fails the identity created by signup stays
//! behind, and retrying with the same email will be rejected by signup.

#[cfg(test)]
#[path = "intake_test.rs"]
mod intake_test;

use crate::net::error::ApiError;
use crate::net::services::{ClientStore, IdentityProvider};
use crate::net::types::{LatLng, NewClientRow};

/// Password assigned to every client identity created from the admin form.
pub const DEFAULT_CLIENT_PASSWORD: &str = "Lifeline!2024";

/// Field values collected by the intake form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntakeForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub emergency_contact: String,
    /// Coordinates of the selected address suggestion, if any.
    pub location: Option<LatLng>,
}

impl IntakeForm {
    /// Check required fields.
    ///
    /// # Errors
    ///
    /// Returns the message to show inline for the first failing field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required.");
        }
        if self.email.trim().is_empty() {
            return Err("Email is required.");
        }
        if !self.email.contains('@') {
            return Err("Enter a valid email address.");
        }
        if self.phone.trim().is_empty() {
            return Err("Phone is required.");
        }
        Ok(())
    }

    /// Row payload for the identity `id`, with text fields trimmed.
    #[must_use]
    pub fn to_row(&self, id: &str) -> NewClientRow {
        NewClientRow {
            id: id.to_owned(),
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            address: self.address.trim().to_owned(),
            emergency_contact: self.emergency_contact.trim().to_owned(),
            location: self.location.filter(|p| !p.is_origin()),
            is_active: true,
        }
    }
}

/// Why an intake submission stopped.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("{0}")]
    Validation(&'static str),
    #[error(transparent)]
    SignUp(ApiError),
    #[error(transparent)]
    Insert(ApiError),
}

/// Run the intake workflow for `form`, returning the inserted row.
///
/// # Errors
///
/// Stops at the first failing step. A validation failure makes no calls; a
/// signup failure makes no insert call.
pub async fn submit_client_intake<I, S>(identity: &I, store: &S, form: &IntakeForm) -> Result<NewClientRow, IntakeError>
where
    I: IdentityProvider + ?Sized,
    S: ClientStore + ?Sized,
{
    form.validate().map_err(IntakeError::Validation)?;
    let id = identity
        .sign_up(form.email.trim(), DEFAULT_CLIENT_PASSWORD)
        .await
        .map_err(IntakeError::SignUp)?;
    let row = form.to_row(&id);
    store.insert_client(&row).await.map_err(IntakeError::Insert)?;
    log::info!("client {} enrolled", row.id);
    Ok(row)
}
