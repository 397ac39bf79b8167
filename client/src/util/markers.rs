//! Marker colors, icons and labels derived from status enums.

#[cfg(test)]
#[path = "markers_test.rs"]
mod markers_test;

use crate::net::types::{AlertStatus, AlertType, LatLng};
use crate::state::map::LocationCategory;

const CLIENT_COLOR: &str = "#2563eb";
const CURRENT_COLOR: &str = "#7c3aed";

/// Visual treatment for one marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub icon: &'static str,
    /// Active alerts pulse; nothing else does.
    pub pulsing: bool,
}

impl MarkerStyle {
    /// CSS class list for the marker button.
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.pulsing { "map-marker map-marker--pulse" } else { "map-marker" }
    }
}

#[must_use]
pub fn marker_style(category: &LocationCategory) -> MarkerStyle {
    match *category {
        LocationCategory::Client => MarkerStyle { color: CLIENT_COLOR, icon: "👤", pulsing: false },
        LocationCategory::Current => MarkerStyle { color: CURRENT_COLOR, icon: "📍", pulsing: false },
        LocationCategory::Alert { status, alert_type } => MarkerStyle {
            color: alert_status_color(status),
            icon: alert_type_icon(alert_type),
            pulsing: status == AlertStatus::Active,
        },
    }
}

#[must_use]
pub fn alert_status_color(status: AlertStatus) -> &'static str {
    match status {
        AlertStatus::Active => "#dc2626",
        AlertStatus::Acknowledged => "#f59e0b",
        AlertStatus::Resolved => "#16a34a",
    }
}

#[must_use]
pub fn alert_status_label(status: AlertStatus) -> &'static str {
    match status {
        AlertStatus::Active => "Active",
        AlertStatus::Acknowledged => "Acknowledged",
        AlertStatus::Resolved => "Resolved",
    }
}

#[must_use]
pub fn alert_type_icon(alert_type: AlertType) -> &'static str {
    match alert_type {
        AlertType::Panic => "🚨",
        AlertType::Accident => "💥",
        AlertType::Assistance => "🆘",
    }
}

#[must_use]
pub fn alert_type_label(alert_type: AlertType) -> &'static str {
    match alert_type {
        AlertType::Panic => "Panic",
        AlertType::Accident => "Accident",
        AlertType::Assistance => "Assistance",
    }
}

/// Short label for the detail panel header.
#[must_use]
pub fn category_label(category: &LocationCategory) -> &'static str {
    match category {
        LocationCategory::Client => "Client",
        LocationCategory::Current => "Your location",
        LocationCategory::Alert { alert_type, .. } => alert_type_label(*alert_type),
    }
}

/// `40.71280, -74.00600` style coordinates for display.
#[must_use]
pub fn format_lat_lng(point: LatLng) -> String {
    format!("{:.5}, {:.5}", point.lat, point.lng)
}
