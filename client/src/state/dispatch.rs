//! Shared client/alert records for the whole application.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app shell owns one `RwSignal<DispatchState>` and refreshes it from the
//! database on a timer. Panels only read it; the sole local write is
//! [`DispatchState::set_client_location`], used by the location updater.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use crate::net::types::{AlertRecord, ClientRecord, LatLng};

/// Records shared by every panel.
#[derive(Clone, Debug, Default)]
pub struct DispatchState {
    /// All client rows.
    pub clients: Vec<ClientRecord>,
    /// All alert rows, newest first as delivered.
    pub alerts: Vec<AlertRecord>,
    /// Client whose "my location" view is open, if any.
    pub current_client_id: Option<String>,
    /// True while the first load is in flight.
    pub loading: bool,
    /// Last refresh failure, cleared by the next successful refresh.
    pub error: Option<String>,
}

impl DispatchState {
    /// Replace both record lists after a successful refresh.
    pub fn replace_records(&mut self, clients: Vec<ClientRecord>, alerts: Vec<AlertRecord>) {
        self.clients = clients;
        self.alerts = alerts;
        self.loading = false;
        self.error = None;
    }

    #[must_use]
    pub fn client(&self, id: &str) -> Option<&ClientRecord> {
        self.clients.iter().find(|c| c.id == id)
    }

    /// The client whose view is open.
    #[must_use]
    pub fn current_client(&self) -> Option<&ClientRecord> {
        self.current_client_id.as_deref().and_then(|id| self.client(id))
    }

    /// The open client's stored location, `(0, 0)` counting as none.
    #[must_use]
    pub fn current_location(&self) -> Option<LatLng> {
        self.current_client().and_then(ClientRecord::known_location)
    }

    /// Record a new position for a client. Returns `false` if the id is unknown.
    pub fn set_client_location(&mut self, id: &str, location: LatLng) -> bool {
        match self.clients.iter_mut().find(|c| c.id == id) {
            Some(client) => {
                client.location = Some(location);
                true
            }
            None => false,
        }
    }
}
