//! Pan/zoom/style state for the map widget and the marker projection.
//!
//! DESIGN
//! ======
//! Markers are placed with a linear approximation rather than a true
//! mercator transform: longitude maps straight to pixels, latitude is
//! stretched by `1 / cos(center.lat)`. Near the viewport center this agrees
//! with the tile backdrop; further out it drifts, which is acceptable for a
//! decorative overview map.
//!
//! Fields are private so zoom can never leave `[MIN_ZOOM, MAX_ZOOM]` and the
//! center always stays inside the mercator square.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::consts::{
    DEFAULT_VIEWPORT_HEIGHT_PX, DEFAULT_VIEWPORT_WIDTH_PX, DEFAULT_ZOOM, FIT_MARGIN_PCT, MAX_ZOOM, MIN_LAT_COS, MIN_ZOOM,
    PAN_STEP_PX, TILE_SIZE_PX,
};
use crate::geo::{LatLng, wrap_lng};
use crate::tiles::{TilePlacement, TileStyle, tile_grid};

/// Marker position as a percentage of the viewport, measured from the
/// top-left corner. `(50, 50)` is the middle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenOffset {
    pub left_pct: f64,
    pub top_pct: f64,
}

impl ScreenOffset {
    /// True when the offset lands inside the viewport.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.is_within(0.0)
    }

    /// True when the offset lands at least `margin_pct` inside every edge.
    #[must_use]
    pub fn is_within(&self, margin_pct: f64) -> bool {
        let range = margin_pct..=100.0 - margin_pct;
        range.contains(&self.left_pct) && range.contains(&self.top_pct)
    }

    /// Inline CSS for an absolutely positioned marker.
    #[must_use]
    pub fn css(&self) -> String {
        format!("left:{:.4}%;top:{:.4}%;", self.left_pct, self.top_pct)
    }
}

/// Direction for the arrow-button pan controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    North,
    South,
    East,
    West,
}

/// Map viewport: center, integer zoom level, backdrop style, and the
/// measured size of the host element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    center: LatLng,
    zoom: u8,
    style: TileStyle,
    width_px: f64,
    height_px: f64,
}

impl Viewport {
    /// Build a viewport, clamping `zoom` and normalizing `center`.
    #[must_use]
    pub fn new(center: LatLng, zoom: u8) -> Self {
        Self {
            center: center.normalized(),
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            style: TileStyle::default(),
            width_px: DEFAULT_VIEWPORT_WIDTH_PX,
            height_px: DEFAULT_VIEWPORT_HEIGHT_PX,
        }
    }

    #[must_use]
    pub fn center(&self) -> LatLng {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    #[must_use]
    pub fn style(&self) -> TileStyle {
        self.style
    }

    #[must_use]
    pub fn width_px(&self) -> f64 {
        self.width_px
    }

    #[must_use]
    pub fn height_px(&self) -> f64 {
        self.height_px
    }

    /// Record the host element's CSS size. Sizes below one pixel are raised
    /// to one so projection never divides by zero.
    pub fn set_size(&mut self, width_px: f64, height_px: f64) {
        self.width_px = width_px.max(1.0);
        self.height_px = height_px.max(1.0);
    }

    pub fn toggle_style(&mut self) {
        self.style = self.style.toggled();
    }

    /// Move the center without changing zoom.
    pub fn set_center(&mut self, center: LatLng) {
        self.center = center.normalized();
    }

    /// Set zoom from any integer, clamped into range.
    pub fn set_zoom(&mut self, zoom: i32) {
        let clamped = zoom.clamp(i32::from(MIN_ZOOM), i32::from(MAX_ZOOM));
        self.zoom = u8::try_from(clamped).unwrap_or(MIN_ZOOM);
    }

    /// Zoom in one level. Returns `false` when already at [`MAX_ZOOM`].
    pub fn zoom_in(&mut self) -> bool {
        if self.zoom >= MAX_ZOOM {
            return false;
        }
        self.zoom += 1;
        true
    }

    /// Zoom out one level. Returns `false` when already at [`MIN_ZOOM`].
    pub fn zoom_out(&mut self) -> bool {
        if self.zoom <= MIN_ZOOM {
            return false;
        }
        self.zoom -= 1;
        true
    }

    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.zoom < MAX_ZOOM
    }

    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.zoom > MIN_ZOOM
    }

    /// Screen pixels per degree of longitude at the current zoom.
    #[must_use]
    pub fn pixels_per_degree(&self) -> f64 {
        TILE_SIZE_PX * 2_f64.powi(i32::from(self.zoom)) / 360.0
    }

    /// Degrees covered by `px` screen pixels at the current zoom. Halves with
    /// every zoom level, which keeps perceived pan speed constant.
    #[must_use]
    pub fn pixels_to_degrees(&self, px: f64) -> f64 {
        px / self.pixels_per_degree()
    }

    fn lat_cos(&self) -> f64 {
        self.center.lat.to_radians().cos().max(MIN_LAT_COS)
    }

    /// Project a coordinate to a percentage offset inside the viewport.
    /// Longitude differences take the short way around the antimeridian,
    /// matching the wrapped tile grid.
    #[must_use]
    pub fn project(&self, point: LatLng) -> ScreenOffset {
        let ppd = self.pixels_per_degree();
        let dx = wrap_lng(point.lng - self.center.lng) * ppd;
        let dy = (self.center.lat - point.lat) * ppd / self.lat_cos();
        ScreenOffset {
            left_pct: 50.0 + dx / self.width_px * 100.0,
            top_pct: 50.0 + dy / self.height_px * 100.0,
        }
    }

    /// Shift the view by a pointer drag of `(dx_px, dy_px)`. Dragging right
    /// reveals what lies west; dragging down reveals what lies north.
    pub fn pan_by_pixels(&mut self, dx_px: f64, dy_px: f64) {
        let lng = self.center.lng - self.pixels_to_degrees(dx_px);
        let lat = self.center.lat + self.pixels_to_degrees(dy_px) * self.lat_cos();
        self.center = LatLng::new(lat, lng).normalized();
    }

    /// One arrow-button pan step.
    pub fn pan(&mut self, direction: PanDirection) {
        match direction {
            PanDirection::North => self.pan_by_pixels(0.0, PAN_STEP_PX),
            PanDirection::South => self.pan_by_pixels(0.0, -PAN_STEP_PX),
            PanDirection::East => self.pan_by_pixels(-PAN_STEP_PX, 0.0),
            PanDirection::West => self.pan_by_pixels(PAN_STEP_PX, 0.0),
        }
    }

    /// Restore a center and zoom, keeping the current style and size.
    pub fn recenter(&mut self, center: LatLng, zoom: u8) {
        self.center = center.normalized();
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Backdrop tiles for the current center, zoom, style and size.
    #[must_use]
    pub fn tiles(&self) -> Vec<TilePlacement> {
        tile_grid(self.center, self.zoom, self.style, self.width_px, self.height_px)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(LatLng::new(0.0, 0.0), DEFAULT_ZOOM)
    }
}

/// Closest zoom, never past [`DEFAULT_ZOOM`], at which every point projects
/// at least [`FIT_MARGIN_PCT`] inside a `width_px` × `height_px` view centered
/// on `center`. Falls back to [`MIN_ZOOM`] when nothing fits.
#[must_use]
pub fn fit_zoom(center: LatLng, points: &[LatLng], width_px: f64, height_px: f64) -> u8 {
    let mut viewport = Viewport::new(center, DEFAULT_ZOOM);
    viewport.set_size(width_px, height_px);
    (MIN_ZOOM..=DEFAULT_ZOOM)
        .rev()
        .find(|&zoom| {
            viewport.zoom = zoom;
            points.iter().all(|&p| viewport.project(p).is_within(FIT_MARGIN_PCT))
        })
        .unwrap_or(MIN_ZOOM)
}
