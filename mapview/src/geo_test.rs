#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- LatLng ---

#[test]
fn latlng_new_sets_fields() {
    let p = LatLng::new(51.5, -0.12);
    assert_eq!(p.lat, 51.5);
    assert_eq!(p.lng, -0.12);
}

#[test]
fn origin_is_detected_exactly() {
    assert!(LatLng::new(0.0, 0.0).is_origin());
    assert!(!LatLng::new(0.0, 0.000_1).is_origin());
    assert!(!LatLng::new(-0.000_1, 0.0).is_origin());
}

#[test]
fn normalized_clamps_latitude_to_mercator_square() {
    let p = LatLng::new(89.9, 10.0).normalized();
    assert_eq!(p.lat, MAX_MERCATOR_LAT);
    let q = LatLng::new(-89.9, 10.0).normalized();
    assert_eq!(q.lat, -MAX_MERCATOR_LAT);
}

#[test]
fn normalized_keeps_in_range_points() {
    let p = LatLng::new(40.7, -74.0);
    assert_eq!(p.normalized(), p);
}

#[test]
fn latlng_serde_uses_lat_lng_keys() {
    let json = serde_json::to_value(LatLng::new(1.5, 2.5)).unwrap();
    assert_eq!(json, serde_json::json!({ "lat": 1.5, "lng": 2.5 }));
}

// --- wrap_lng ---

#[test]
fn wrap_lng_leaves_in_range_values() {
    assert!(approx_eq(wrap_lng(0.0), 0.0));
    assert!(approx_eq(wrap_lng(179.5), 179.5));
    assert!(approx_eq(wrap_lng(-180.0), -180.0));
}

#[test]
fn wrap_lng_wraps_past_antimeridian() {
    assert!(approx_eq(wrap_lng(190.0), -170.0));
    assert!(approx_eq(wrap_lng(-190.0), 170.0));
    assert!(approx_eq(wrap_lng(540.0), -180.0));
}
