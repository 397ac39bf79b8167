//! Marker model consumed by the map widget.
//!
//! `MapLocation`s are rebuilt from records on every render and never written
//! back anywhere.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use crate::net::types::{AlertRecord, AlertStatus, AlertType, ClientRecord, LatLng};

/// What a marker stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationCategory {
    /// A registered client's last known position.
    Client,
    /// The viewing device's own position.
    Current,
    /// An emergency alert.
    Alert { status: AlertStatus, alert_type: AlertType },
}

/// One marker on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct MapLocation {
    pub id: String,
    pub position: LatLng,
    pub name: String,
    pub category: LocationCategory,
}

impl MapLocation {
    /// Marker for a client, or `None` when the client has no usable location.
    #[must_use]
    pub fn from_client(client: &ClientRecord) -> Option<Self> {
        let position = client.known_location()?;
        Some(Self {
            id: client.id.clone(),
            position,
            name: client.name.clone(),
            category: LocationCategory::Client,
        })
    }

    /// Marker for an alert, labelled with the owning client's name.
    #[must_use]
    pub fn from_alert(alert: &AlertRecord, client_name: &str) -> Option<Self> {
        let position = alert.known_location()?;
        Some(Self {
            id: alert.id.clone(),
            position,
            name: client_name.to_owned(),
            category: LocationCategory::Alert { status: alert.status, alert_type: alert.alert_type },
        })
    }

    /// Marker for the device's own position.
    #[must_use]
    pub fn current(id: &str, name: &str, position: LatLng) -> Self {
        Self { id: id.to_owned(), position, name: name.to_owned(), category: LocationCategory::Current }
    }

    #[must_use]
    pub fn alert_status(&self) -> Option<AlertStatus> {
        match self.category {
            LocationCategory::Alert { status, .. } => Some(status),
            _ => None,
        }
    }
}
