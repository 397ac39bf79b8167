//! Browser-free map math for the Lifeline map widget.
//!
//! The widget in the `client` crate only renders; everything that decides
//! *where* things go lives here so it can be tested without a DOM. The
//! projection is a linear approximation good enough to place markers over
//! slippy-map tiles. It is not navigation grade.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geo`] | `LatLng` and coordinate normalization |
//! | [`viewport`] | Pan/zoom/style state and marker projection |
//! | [`tiles`] | Raster tile styles, URLs, and the 3×3 backdrop grid |
//! | [`consts`] | Shared numeric constants (zoom limits, tile size, pan step) |

pub mod consts;
pub mod geo;
pub mod tiles;
pub mod viewport;
