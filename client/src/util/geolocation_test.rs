use super::*;
use futures::executor::block_on;

#[test]
fn error_codes_map_to_failures() {
    assert_eq!(GeoFailure::from_code(1), GeoFailure::PermissionDenied);
    assert_eq!(GeoFailure::from_code(2), GeoFailure::Unavailable);
    assert_eq!(GeoFailure::from_code(3), GeoFailure::Timeout);
    assert_eq!(GeoFailure::from_code(99), GeoFailure::Unavailable);
}

#[test]
fn only_denial_needs_dialog() {
    assert!(GeoFailure::PermissionDenied.needs_dialog());
    assert!(!GeoFailure::Unavailable.needs_dialog());
    assert!(!GeoFailure::Timeout.needs_dialog());
    assert!(!GeoFailure::Unsupported.needs_dialog());
}

#[test]
fn denial_message_points_at_settings() {
    assert!(GeoFailure::PermissionDenied.message().contains("settings"));
}

#[test]
fn effective_location_drops_sentinel() {
    assert_eq!(effective_location(None), None);
    assert_eq!(effective_location(Some(LatLng::new(0.0, 0.0))), None);
    assert_eq!(effective_location(Some(LatLng::new(0.0, 1.0))), Some(LatLng::new(0.0, 1.0)));
}

#[test]
fn locate_status_messages() {
    assert_eq!(LocateStatus::Idle.message(), None);
    assert_eq!(LocateStatus::Located(LatLng::new(1.0, 1.0)).message(), None);
    assert!(LocateStatus::Locating.is_busy());
    assert_eq!(
        LocateStatus::Failed(GeoFailure::Timeout).message(),
        Some(GeoFailure::Timeout.message())
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn request_outside_browser_is_unsupported() {
    assert_eq!(block_on(request_current_position()), Err(GeoFailure::Unsupported));
}

#[test]
fn origin_fix_is_rejected_like_a_stored_sentinel() {
    assert_eq!(accept_fix(LatLng::new(0.0, 0.0)), Err(GeoFailure::Unavailable));
    assert_eq!(accept_fix(LatLng::new(51.5, -0.12)), Ok(LatLng::new(51.5, -0.12)));
}
