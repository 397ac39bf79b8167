//! Record and wire DTOs shared with the hosted backend.
//!
//! DESIGN
//! ======
//! Client and alert rows are owned by the external database; these types
//! mirror its column names so PostgREST JSON round-trips without renaming.
//! Locations reuse `mapview::geo::LatLng` directly, with `(0, 0)` meaning
//! "no location".

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

pub use mapview::geo::LatLng;

/// Lifecycle of an emergency alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Acknowledged,
    Resolved,
}

/// What kind of help an alert asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Panic,
    Accident,
    Assistance,
}

/// A row of the `clients` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Identity id issued by the auth provider (UUID string).
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub emergency_contact: String,
    /// Last reported position, if the client ever shared one.
    #[serde(default)]
    pub location: Option<LatLng>,
    /// Whether the client is currently enrolled/online.
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

impl ClientRecord {
    /// The client's location, treating the `(0, 0)` sentinel as absent.
    #[must_use]
    pub fn known_location(&self) -> Option<LatLng> {
        self.location.filter(|p| !p.is_origin())
    }
}

/// A row of the `alerts` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub id: String,
    pub client_id: String,
    #[serde(rename = "type", alias = "alert_type")]
    pub alert_type: AlertType,
    pub status: AlertStatus,
    #[serde(default)]
    pub location: Option<LatLng>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl AlertRecord {
    /// The alert's location, treating the `(0, 0)` sentinel as absent.
    #[must_use]
    pub fn known_location(&self) -> Option<LatLng> {
        self.location.filter(|p| !p.is_origin())
    }
}

/// Insert payload for a new `clients` row, keyed by the identity id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewClientRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub emergency_contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LatLng>,
    pub is_active: bool,
}

/// One geocoder candidate offered by address autocomplete.
#[derive(Clone, Debug, PartialEq)]
pub struct AddressSuggestion {
    pub display_name: String,
    pub location: LatLng,
}

/// Raw geocoder search hit. Coordinates arrive as decimal strings.
#[derive(Clone, Debug, Deserialize)]
pub struct GeocodePlace {
    pub display_name: String,
    #[serde(deserialize_with = "deserialize_f64_from_string")]
    pub lat: f64,
    #[serde(deserialize_with = "deserialize_f64_from_string")]
    pub lon: f64,
}

impl From<GeocodePlace> for AddressSuggestion {
    fn from(place: GeocodePlace) -> Self {
        Self { display_name: place.display_name, location: LatLng::new(place.lat, place.lon) }
    }
}

/// Browser-visible service settings served by `/api/config`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicConfig {
    /// Base URL of the auth/database provider (no trailing slash).
    pub supabase_url: String,
    /// Public anon key sent as `apikey` and bearer token.
    pub supabase_anon_key: String,
    /// Base URL of the geocoding search service (no trailing slash).
    pub geocoder_url: String,
}

fn default_true() -> bool {
    true
}

fn deserialize_f64_from_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}
