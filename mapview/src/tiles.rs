//! Raster tile styles and the backdrop grid.
//!
//! The widget's enhanced backdrop is a 3×3 block of slippy-map tiles around
//! the tile that contains the viewport center. The grid is recomputed from
//! scratch on every center/zoom/style change; there is no tile cache here.

#[cfg(test)]
#[path = "tiles_test.rs"]
mod tiles_test;

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::consts::{TILE_GRID_RADIUS, TILE_SIZE_PX};
use crate::geo::LatLng;

/// Raster imagery source for the map backdrop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileStyle {
    /// OpenStreetMap standard street tiles.
    #[default]
    Street,
    /// Esri World Imagery satellite tiles.
    Satellite,
}

impl TileStyle {
    /// Button label for this style.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Street => "Street",
            Self::Satellite => "Satellite",
        }
    }

    /// The other style.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Street => Self::Satellite,
            Self::Satellite => Self::Street,
        }
    }

    /// Attribution text required by the tile provider.
    #[must_use]
    pub fn attribution(self) -> &'static str {
        match self {
            Self::Street => "© OpenStreetMap contributors",
            Self::Satellite => "Tiles © Esri",
        }
    }

    /// Image URL for one tile. Esri addresses tiles row-before-column.
    #[must_use]
    pub fn url(self, tile: TileCoord) -> String {
        let TileCoord { z, x, y } = tile;
        match self {
            Self::Street => format!("https://tile.openstreetmap.org/{z}/{x}/{y}.png"),
            Self::Satellite => format!(
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"
            ),
        }
    }
}

/// Slippy-map tile address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

/// A tile positioned inside the viewport.
///
/// `left_px` / `top_px` are the tile's top-left corner relative to the
/// viewport's top-left corner, in CSS pixels. They can be negative.
#[derive(Debug, Clone, PartialEq)]
pub struct TilePlacement {
    pub coord: TileCoord,
    /// Which copy of the world the tile belongs to when the grid crosses the
    /// antimeridian (0 for the primary copy).
    pub world_copy: i64,
    pub url: String,
    pub left_px: f64,
    pub top_px: f64,
}

impl TilePlacement {
    /// Key for keyed rendering. Unique within one grid, and stable while
    /// the same tile stays on screen during a pan.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}#{}", self.url, self.world_copy)
    }
}

/// Number of tiles along one axis at `zoom`.
#[must_use]
pub fn tiles_per_axis(zoom: u8) -> i64 {
    1_i64 << zoom
}

/// Fractional tile position of `point` at `zoom` (web-mercator).
#[must_use]
pub fn fractional_tile(point: LatLng, zoom: u8) -> (f64, f64) {
    let point = point.normalized();
    #[allow(clippy::cast_precision_loss)]
    let n = tiles_per_axis(zoom) as f64;
    let x = (point.lng + 180.0) / 360.0 * n;
    let lat_rad = point.lat.to_radians();
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * n;
    (x, y)
}

/// The backdrop tiles for a viewport centered on `center`.
///
/// Columns wrap around the antimeridian; rows above the north edge or below
/// the south edge of the world are skipped.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
#[must_use]
pub fn tile_grid(center: LatLng, zoom: u8, style: TileStyle, width_px: f64, height_px: f64) -> Vec<TilePlacement> {
    let n = tiles_per_axis(zoom);
    let (fx, fy) = fractional_tile(center, zoom);
    let center_x = fx.floor() as i64;
    let center_y = fy.floor() as i64;

    let mut out = Vec::with_capacity(9);
    for dy in -TILE_GRID_RADIUS..=TILE_GRID_RADIUS {
        let row = center_y + dy;
        if row < 0 || row >= n {
            continue;
        }
        for dx in -TILE_GRID_RADIUS..=TILE_GRID_RADIUS {
            let col = center_x + dx;
            let coord = TileCoord { z: zoom, x: col.rem_euclid(n) as u32, y: row as u32 };
            out.push(TilePlacement {
                coord,
                world_copy: col.div_euclid(n),
                url: style.url(coord),
                left_px: width_px * 0.5 + (col as f64 - fx) * TILE_SIZE_PX,
                top_px: height_px * 0.5 + (row as f64 - fy) * TILE_SIZE_PX,
            });
        }
    }
    out
}
