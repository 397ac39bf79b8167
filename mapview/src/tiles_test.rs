#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- TileStyle ---

#[test]
fn tile_style_default_is_street() {
    assert_eq!(TileStyle::default(), TileStyle::Street);
}

#[test]
fn tile_style_toggle_round_trips() {
    assert_eq!(TileStyle::Street.toggled(), TileStyle::Satellite);
    assert_eq!(TileStyle::Satellite.toggled(), TileStyle::Street);
}

#[test]
fn street_url_uses_z_x_y_order() {
    let url = TileStyle::Street.url(TileCoord { z: 10, x: 511, y: 340 });
    assert_eq!(url, "https://tile.openstreetmap.org/10/511/340.png");
}

#[test]
fn satellite_url_uses_z_y_x_order() {
    let url = TileStyle::Satellite.url(TileCoord { z: 10, x: 511, y: 340 });
    assert!(url.ends_with("/tile/10/340/511"), "unexpected url {url}");
}

#[test]
fn tile_style_labels_and_attribution_are_nonempty() {
    for style in [TileStyle::Street, TileStyle::Satellite] {
        assert!(!style.label().is_empty());
        assert!(!style.attribution().is_empty());
    }
}

// --- fractional_tile ---

#[test]
fn fractional_tile_of_origin_is_grid_center() {
    let (x, y) = fractional_tile(LatLng::new(0.0, 0.0), 1);
    assert!(approx_eq(x, 1.0));
    assert!(approx_eq(y, 1.0));
}

#[test]
fn fractional_tile_matches_known_london_tile() {
    let (x, y) = fractional_tile(LatLng::new(51.5074, -0.1278), 10);
    assert_eq!(x.floor(), 511.0);
    assert_eq!(y.floor(), 340.0);
}

// --- tile_grid ---

#[test]
fn tile_grid_is_three_by_three_away_from_edges() {
    let tiles = tile_grid(LatLng::new(40.7, -74.0), 10, TileStyle::Street, 800.0, 450.0);
    assert_eq!(tiles.len(), 9);
    let mut keys: Vec<String> = tiles.iter().map(TilePlacement::key).collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), 9);
}

#[test]
fn tile_grid_center_tile_covers_viewport_center() {
    let width = 800.0;
    let height = 450.0;
    let tiles = tile_grid(LatLng::new(40.7, -74.0), 10, TileStyle::Street, width, height);
    let center = &tiles[4];
    assert!(center.left_px <= width * 0.5 && width * 0.5 < center.left_px + TILE_SIZE_PX);
    assert!(center.top_px <= height * 0.5 && height * 0.5 < center.top_px + TILE_SIZE_PX);
}

#[test]
fn tile_grid_neighbors_are_one_tile_apart() {
    let tiles = tile_grid(LatLng::new(40.7, -74.0), 10, TileStyle::Street, 800.0, 450.0);
    assert!(approx_eq(tiles[1].left_px - tiles[0].left_px, TILE_SIZE_PX));
    assert!(approx_eq(tiles[3].top_px - tiles[0].top_px, TILE_SIZE_PX));
}

#[test]
fn tile_grid_skips_rows_outside_world_and_wraps_columns() {
    let tiles = tile_grid(LatLng::new(0.0, 0.0), 1, TileStyle::Street, 800.0, 450.0);
    // Row 2 does not exist at zoom 1, so only two rows survive.
    assert_eq!(tiles.len(), 6);
    assert!(tiles.iter().all(|t| t.coord.y < 2));
    // Column 2 wraps back to column 0.
    assert_eq!(tiles[2].coord.x, 0);
}

#[test]
fn tile_grid_urls_follow_style() {
    let tiles = tile_grid(LatLng::new(40.7, -74.0), 10, TileStyle::Satellite, 800.0, 450.0);
    assert!(tiles.iter().all(|t| t.url.contains("World_Imagery")));
}

#[test]
fn tile_keys_stay_unique_when_columns_wrap() {
    let tiles = tile_grid(LatLng::new(0.0, 179.0), 1, TileStyle::Street, 800.0, 450.0);
    let mut keys: Vec<String> = tiles.iter().map(TilePlacement::key).collect();
    let total = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), total);
}

#[test]
fn tile_keys_differ_between_styles() {
    let street = tile_grid(LatLng::new(40.7, -74.0), 10, TileStyle::Street, 800.0, 450.0);
    let satellite = tile_grid(LatLng::new(40.7, -74.0), 10, TileStyle::Satellite, 800.0, 450.0);
    assert_ne!(street[4].key(), satellite[4].key());
}
