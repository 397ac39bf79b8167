#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_MERCATOR_LAT;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True for the exact `(0, 0)` coordinate, which upstream records use to
    /// mean "no location".
    #[must_use]
    pub fn is_origin(&self) -> bool {
        self.lat == 0.0 && self.lng == 0.0
    }

    /// Clamp latitude into the mercator square and wrap longitude into
    /// `[-180, 180)`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            lat: self.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT),
            lng: wrap_lng(self.lng),
        }
    }
}

/// Wrap a longitude into `[-180, 180)`.
#[must_use]
pub fn wrap_lng(lng: f64) -> f64 {
    if (-180.0..180.0).contains(&lng) {
        return lng;
    }
    (lng + 180.0).rem_euclid(360.0) - 180.0
}
