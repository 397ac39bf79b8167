use super::*;
use time::macros::datetime;

use crate::net::types::{AlertStatus, AlertType};

fn client(id: &str, location: Option<LatLng>) -> ClientRecord {
    ClientRecord {
        id: id.to_owned(),
        name: format!("Client {id}"),
        phone: "555-0100".to_owned(),
        email: format!("{id}@example.com"),
        address: String::new(),
        emergency_contact: String::new(),
        location,
        is_active: true,
        created_at: None,
    }
}

fn alert(id: &str) -> AlertRecord {
    AlertRecord {
        id: id.to_owned(),
        client_id: "c1".to_owned(),
        alert_type: AlertType::Panic,
        status: AlertStatus::Active,
        location: None,
        created_at: datetime!(2024-01-01 00:00 UTC),
    }
}

#[test]
fn dispatch_state_defaults_are_empty() {
    let state = DispatchState::default();
    assert!(state.clients.is_empty());
    assert!(state.alerts.is_empty());
    assert!(state.current_client_id.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn replace_records_clears_loading_and_error() {
    let mut state = DispatchState { loading: true, error: Some("boom".to_owned()), ..Default::default() };
    state.replace_records(vec![client("c1", None)], vec![alert("a1")]);
    assert_eq!(state.clients.len(), 1);
    assert_eq!(state.alerts.len(), 1);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn current_client_follows_current_id() {
    let mut state = DispatchState::default();
    state.clients = vec![client("c1", None), client("c2", None)];
    assert!(state.current_client().is_none());
    state.current_client_id = Some("c2".to_owned());
    assert_eq!(state.current_client().map(|c| c.id.as_str()), Some("c2"));
    state.current_client_id = Some("missing".to_owned());
    assert!(state.current_client().is_none());
}

#[test]
fn current_location_ignores_zero_sentinel() {
    let mut state = DispatchState::default();
    state.clients = vec![client("c1", Some(LatLng::new(0.0, 0.0)))];
    state.current_client_id = Some("c1".to_owned());
    assert_eq!(state.current_location(), None);
}

#[test]
fn set_client_location_updates_known_client_only() {
    let mut state = DispatchState::default();
    state.clients = vec![client("c1", None)];
    state.current_client_id = Some("c1".to_owned());
    assert!(state.set_client_location("c1", LatLng::new(10.0, 20.0)));
    assert_eq!(state.current_location(), Some(LatLng::new(10.0, 20.0)));
    assert!(!state.set_client_location("nope", LatLng::new(1.0, 1.0)));
}
