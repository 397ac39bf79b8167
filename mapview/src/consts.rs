//! Shared numeric constants for the mapview crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Lowest zoom level the widget allows (whole world in a few tiles).
pub const MIN_ZOOM: u8 = 1;

/// Highest zoom level the widget allows (street level).
pub const MAX_ZOOM: u8 = 18;

/// Zoom level used when a caller does not pick one.
pub const DEFAULT_ZOOM: u8 = 12;

// ── Projection ──────────────────────────────────────────────────

/// Edge length of one raster tile in CSS pixels.
pub const TILE_SIZE_PX: f64 = 256.0;

/// Latitude limit of the web-mercator square.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_78;

/// Floor for the latitude cosine so the projection never divides by zero.
pub const MIN_LAT_COS: f64 = 0.01;

// ── Viewport ────────────────────────────────────────────────────

/// Screen distance covered by one arrow-button pan step.
pub const PAN_STEP_PX: f64 = 100.0;

/// Viewport size assumed before the host element has been measured.
pub const DEFAULT_VIEWPORT_WIDTH_PX: f64 = 800.0;

/// See [`DEFAULT_VIEWPORT_WIDTH_PX`].
pub const DEFAULT_VIEWPORT_HEIGHT_PX: f64 = 450.0;

/// Inset, in percent of the viewport, kept clear around fitted points.
pub const FIT_MARGIN_PCT: f64 = 5.0;

// ── Tiles ───────────────────────────────────────────────────────

/// Tiles fetched on each side of the center tile (1 → 3×3 grid).
pub const TILE_GRID_RADIUS: i64 = 1;
