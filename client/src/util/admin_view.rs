//! Pure derivations behind the admin map panel.
//!
//! DESIGN
//! ======
//! Everything here is a function of the record lists (and, for ages, a
//! caller-supplied "now") so the panel can be rebuilt in a `Memo` and tested
//! without a browser.

#[cfg(test)]
#[path = "admin_view_test.rs"]
mod admin_view_test;

use mapview::consts::DEFAULT_VIEWPORT_WIDTH_PX;
use mapview::viewport::fit_zoom;
use time::OffsetDateTime;

use crate::net::types::{AlertRecord, AlertStatus, ClientRecord, LatLng};
use crate::state::map::MapLocation;
use crate::util::markers::{alert_status_color, alert_status_label, alert_type_icon};

/// Name used for alerts whose client row is missing.
pub const UNKNOWN_CLIENT: &str = "Unknown client";

/// How many alerts the sidebar lists.
pub const RECENT_ALERT_LIMIT: usize = 5;

/// Map center when no marker has a location (continental US).
pub const FALLBACK_CENTER: LatLng = LatLng { lat: 39.8283, lng: -98.5795 };

/// Zoom that shows the continental US around [`FALLBACK_CENTER`].
pub const FALLBACK_ZOOM: u8 = 4;

/// Rendered height of the admin map, in CSS pixels.
pub const ADMIN_MAP_HEIGHT_PX: f64 = 520.0;

/// Initial center and zoom of the admin map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapFrame {
    pub center: LatLng,
    pub zoom: u8,
}

/// Sidebar counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdminStats {
    /// Clients with `is_active` set.
    pub online_clients: usize,
    /// Alerts still in the `active` state.
    pub active_alerts: usize,
    /// Active clients with a known location.
    pub tracked_clients: usize,
}

/// One row of the "recent alerts" list.
#[derive(Clone, Debug, PartialEq)]
pub struct RecentAlertRow {
    pub id: String,
    pub client_name: String,
    pub icon: &'static str,
    pub status_label: &'static str,
    pub color: &'static str,
    pub age: String,
}

/// Markers for active clients with a location and for active alerts with a
/// location. Alert markers are named after their client.
#[must_use]
pub fn build_admin_markers(clients: &[ClientRecord], alerts: &[AlertRecord]) -> Vec<MapLocation> {
    let client_markers = clients.iter().filter(|c| c.is_active).filter_map(MapLocation::from_client);
    let alert_markers = alerts
        .iter()
        .filter(|a| a.status == AlertStatus::Active)
        .filter_map(|a| MapLocation::from_alert(a, client_name(clients, &a.client_id)));
    client_markers.chain(alert_markers).collect()
}

#[must_use]
pub fn admin_stats(clients: &[ClientRecord], alerts: &[AlertRecord]) -> AdminStats {
    let online: Vec<&ClientRecord> = clients.iter().filter(|c| c.is_active).collect();
    AdminStats {
        online_clients: online.len(),
        active_alerts: alerts.iter().filter(|a| a.status == AlertStatus::Active).count(),
        tracked_clients: online.iter().filter(|c| c.known_location().is_some()).count(),
    }
}

/// The `limit` most recent alerts, newest first, whatever their status.
#[must_use]
pub fn recent_alerts(
    clients: &[ClientRecord],
    alerts: &[AlertRecord],
    now: OffsetDateTime,
    limit: usize,
) -> Vec<RecentAlertRow> {
    let mut sorted: Vec<&AlertRecord> = alerts.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
        .into_iter()
        .take(limit)
        .map(|alert| RecentAlertRow {
            id: alert.id.clone(),
            client_name: client_name(clients, &alert.client_id).to_owned(),
            icon: alert_type_icon(alert.alert_type),
            status_label: alert_status_label(alert.status),
            color: alert_status_color(alert.status),
            age: format_age(alert.created_at, now),
        })
        .collect()
}

/// Coarse relative age: "just now", "5m ago", "2h ago", "3d ago".
/// Timestamps in the future count as "just now".
#[must_use]
pub fn format_age(created_at: OffsetDateTime, now: OffsetDateTime) -> String {
    let minutes = (now - created_at).whole_minutes();
    if minutes < 1 {
        "just now".to_owned()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if minutes < 60 * 24 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / (60 * 24))
    }
}

/// Mean position of the markers, or [`FALLBACK_CENTER`] when there are none.
#[must_use]
pub fn map_center(markers: &[MapLocation]) -> LatLng {
    if markers.is_empty() {
        return FALLBACK_CENTER;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = markers.len() as f64;
    let (lat, lng) = markers
        .iter()
        .fold((0.0, 0.0), |(lat, lng), m| (lat + m.position.lat, lng + m.position.lng));
    LatLng::new(lat / count, lng / count)
}

/// Center and zoom that show every marker in a `width_px` × `height_px`
/// map. With no markers, the continental US.
#[must_use]
pub fn map_frame(markers: &[MapLocation], width_px: f64, height_px: f64) -> MapFrame {
    if markers.is_empty() {
        return MapFrame { center: FALLBACK_CENTER, zoom: FALLBACK_ZOOM };
    }
    let center = map_center(markers);
    let points: Vec<LatLng> = markers.iter().map(|m| m.position).collect();
    MapFrame { center, zoom: fit_zoom(center, &points, width_px, height_px) }
}

/// [`map_frame`] for the admin map before its width has been measured.
#[must_use]
pub fn admin_map_frame(markers: &[MapLocation]) -> MapFrame {
    map_frame(markers, DEFAULT_VIEWPORT_WIDTH_PX, ADMIN_MAP_HEIGHT_PX)
}

/// The admin map's frame once it is settled. Stays `None` while records are
/// loading or nothing has a location; once set, later records never change it.
#[must_use]
pub fn settled_admin_frame(prev: Option<MapFrame>, loading: bool, markers: &[MapLocation]) -> Option<MapFrame> {
    if prev.is_some() {
        return prev;
    }
    (!loading && !markers.is_empty()).then(|| admin_map_frame(markers))
}

/// Wall-clock now. Uses the JS clock in the browser.
#[must_use]
pub fn current_time() -> OffsetDateTime {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let nanos = (js_sys::Date::now() * 1_000_000.0) as i128;
        OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        OffsetDateTime::now_utc()
    }
}

fn client_name<'a>(clients: &'a [ClientRecord], client_id: &str) -> &'a str {
    clients
        .iter()
        .find(|c| c.id == client_id)
        .map_or(UNKNOWN_CLIENT, |c| c.name.as_str())
}
