use super::*;
use time::Duration;
use time::macros::datetime;

use crate::net::types::AlertType;
use crate::state::map::LocationCategory;

fn client(id: &str, location: Option<LatLng>, is_active: bool) -> ClientRecord {
    ClientRecord {
        id: id.to_owned(),
        name: format!("Client {id}"),
        phone: "555-0100".to_owned(),
        email: format!("{id}@example.com"),
        address: String::new(),
        emergency_contact: String::new(),
        location,
        is_active,
        created_at: None,
    }
}

fn alert(id: &str, client_id: &str, status: AlertStatus, location: Option<LatLng>, minute: u8) -> AlertRecord {
    AlertRecord {
        id: id.to_owned(),
        client_id: client_id.to_owned(),
        alert_type: AlertType::Panic,
        status,
        location,
        created_at: datetime!(2024-06-01 12:00 UTC) + Duration::minutes(i64::from(minute)),
    }
}

#[test]
fn sentinel_client_without_alerts_yields_no_markers() {
    let clients = vec![client("c1", Some(LatLng::new(0.0, 0.0)), true)];
    assert!(build_admin_markers(&clients, &[]).is_empty());
}

#[test]
fn inactive_clients_are_not_plotted() {
    let clients = vec![client("c1", Some(LatLng::new(1.0, 1.0)), false)];
    assert!(build_admin_markers(&clients, &[]).is_empty());
}

#[test]
fn only_active_alerts_with_location_are_plotted() {
    let clients = vec![client("c1", None, true)];
    let alerts = vec![
        alert("a1", "c1", AlertStatus::Active, Some(LatLng::new(2.0, 3.0)), 0),
        alert("a2", "c1", AlertStatus::Resolved, Some(LatLng::new(2.0, 3.0)), 1),
        alert("a3", "c1", AlertStatus::Acknowledged, Some(LatLng::new(2.0, 3.0)), 2),
        alert("a4", "c1", AlertStatus::Active, None, 3),
    ];
    let markers = build_admin_markers(&clients, &alerts);
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].id, "a1");
    assert_eq!(markers[0].name, "Client c1");
    assert!(matches!(markers[0].category, LocationCategory::Alert { status: AlertStatus::Active, .. }));
}

#[test]
fn alert_for_missing_client_uses_fallback_name() {
    let alerts = vec![alert("a1", "ghost", AlertStatus::Active, Some(LatLng::new(2.0, 3.0)), 0)];
    let markers = build_admin_markers(&[], &alerts);
    assert_eq!(markers[0].name, UNKNOWN_CLIENT);
}

#[test]
fn client_markers_come_before_alert_markers() {
    let clients = vec![client("c1", Some(LatLng::new(5.0, 5.0)), true)];
    let alerts = vec![alert("a1", "c1", AlertStatus::Active, Some(LatLng::new(6.0, 6.0)), 0)];
    let markers = build_admin_markers(&clients, &alerts);
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].category, LocationCategory::Client);
}

#[test]
fn stats_count_online_active_and_tracked() {
    let clients = vec![
        client("c1", Some(LatLng::new(1.0, 1.0)), true),
        client("c2", Some(LatLng::new(0.0, 0.0)), true),
        client("c3", Some(LatLng::new(1.0, 1.0)), false),
    ];
    let alerts = vec![
        alert("a1", "c1", AlertStatus::Active, None, 0),
        alert("a2", "c1", AlertStatus::Resolved, None, 1),
    ];
    assert_eq!(
        admin_stats(&clients, &alerts),
        AdminStats { online_clients: 2, active_alerts: 1, tracked_clients: 1 }
    );
}

#[test]
fn recent_alerts_are_newest_first_and_limited() {
    let clients = vec![client("c1", None, true)];
    let alerts: Vec<AlertRecord> =
        (0..7).map(|i| alert(&format!("a{i}"), "c1", AlertStatus::Resolved, None, i)).collect();
    let now = datetime!(2024-06-01 12:10 UTC);
    let rows = recent_alerts(&clients, &alerts, now, RECENT_ALERT_LIMIT);
    let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["a6", "a5", "a4", "a3", "a2"]);
    assert_eq!(rows[0].age, "4m ago");
    assert_eq!(rows[0].color, alert_status_color(AlertStatus::Resolved));
    assert_eq!(rows[0].status_label, "Resolved");
}

#[test]
fn format_age_buckets() {
    let t = datetime!(2024-06-01 12:00 UTC);
    assert_eq!(format_age(t, t + Duration::seconds(30)), "just now");
    assert_eq!(format_age(t, t - Duration::minutes(5)), "just now");
    assert_eq!(format_age(t, t + Duration::minutes(5)), "5m ago");
    assert_eq!(format_age(t, t + Duration::hours(2)), "2h ago");
    assert_eq!(format_age(t, t + Duration::days(3)), "3d ago");
}

#[test]
fn map_center_averages_markers() {
    let markers = vec![
        MapLocation::current("a", "A", LatLng::new(10.0, 20.0)),
        MapLocation::current("b", "B", LatLng::new(20.0, 40.0)),
    ];
    assert_eq!(map_center(&markers), LatLng::new(15.0, 30.0));
    assert_eq!(map_center(&[]), FALLBACK_CENTER);
}

fn all_markers_visible(markers: &[MapLocation]) -> bool {
    let frame = admin_map_frame(markers);
    let mut viewport = mapview::viewport::Viewport::new(frame.center, frame.zoom);
    viewport.set_size(mapview::consts::DEFAULT_VIEWPORT_WIDTH_PX, ADMIN_MAP_HEIGHT_PX);
    markers.iter().all(|m| viewport.project(m.position).is_visible())
}

#[test]
fn admin_frame_shows_clients_in_neighbouring_cities() {
    let clients = vec![
        client("nyc", Some(LatLng::new(40.7128, -74.006)), true),
        client("phl", Some(LatLng::new(39.9526, -75.1652)), true),
    ];
    let markers = build_admin_markers(&clients, &[]);
    assert_eq!(markers.len(), 2);
    assert!(all_markers_visible(&markers));
    assert!(admin_map_frame(&markers).zoom < mapview::consts::DEFAULT_ZOOM);
}

#[test]
fn admin_frame_shows_spread_out_clients_and_alerts() {
    let sets = [
        (
            vec![
                client("sea", Some(LatLng::new(47.6062, -122.3321)), true),
                client("mia", Some(LatLng::new(25.7617, -80.1918)), true),
            ],
            vec![alert("a1", "sea", AlertStatus::Active, Some(LatLng::new(41.8781, -87.6298)), 0)],
        ),
        (
            vec![
                client("lon", Some(LatLng::new(51.5074, -0.1278)), true),
                client("syd", Some(LatLng::new(-33.8688, 151.2093)), true),
            ],
            vec![],
        ),
        (
            vec![client("one", Some(LatLng::new(35.0, 139.0)), true)],
            vec![alert("a2", "one", AlertStatus::Active, Some(LatLng::new(35.01, 139.01)), 0)],
        ),
    ];
    for (clients, alerts) in &sets {
        let markers = build_admin_markers(clients, alerts);
        assert!(!markers.is_empty());
        assert!(all_markers_visible(&markers));
    }
}

#[test]
fn admin_frame_without_markers_shows_fallback() {
    assert_eq!(admin_map_frame(&[]), MapFrame { center: FALLBACK_CENTER, zoom: FALLBACK_ZOOM });
}

#[test]
fn settled_frame_waits_for_located_records_then_stays_put() {
    let first = build_admin_markers(&[client("nyc", Some(LatLng::new(40.7128, -74.006)), true)], &[]);
    assert_eq!(settled_admin_frame(None, true, &first), None);
    assert_eq!(settled_admin_frame(None, false, &[]), None);

    let settled = settled_admin_frame(None, false, &first);
    assert_eq!(settled, Some(admin_map_frame(&first)));

    let moved = build_admin_markers(
        &[
            client("nyc", Some(LatLng::new(40.7128, -74.006)), true),
            client("la", Some(LatLng::new(34.0522, -118.2437)), true),
        ],
        &[alert("a1", "la", AlertStatus::Active, Some(LatLng::new(34.05, -118.24)), 0)],
    );
    assert_eq!(settled_admin_frame(settled, false, &moved), settled);
}
