//! One-shot browser geolocation.
//!
//! Client-side (hydrate): wraps `navigator.geolocation.getCurrentPosition`
//! in a future. Server-side (SSR) and tests: always
//! [`GeoFailure::Unsupported`].

#[cfg(test)]
#[path = "geolocation_test.rs"]
mod geolocation_test;

use crate::net::types::LatLng;

/// Give up on a fix after this long.
pub const GEOLOCATION_TIMEOUT_MS: u32 = 10_000;

/// Why no position was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeoFailure {
    /// The user or browser policy refused access.
    PermissionDenied,
    /// The device could not determine a position.
    Unavailable,
    /// No fix within [`GEOLOCATION_TIMEOUT_MS`].
    Timeout,
    /// No geolocation API in this environment.
    Unsupported,
}

impl GeoFailure {
    /// Map a `GeolocationPositionError.code`.
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            3 => Self::Timeout,
            _ => Self::Unavailable,
        }
    }

    /// User-facing explanation with a next step.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::PermissionDenied => {
                "Location access was denied. Enable location for this site in your browser settings, then try again."
            }
            Self::Unavailable => "Your position could not be determined. Check that location services are on.",
            Self::Timeout => "Locating took too long. Move somewhere with better signal and try again.",
            Self::Unsupported => "This browser does not support location sharing.",
        }
    }

    /// Denial also raises a blocking alert dialog.
    #[must_use]
    pub fn needs_dialog(self) -> bool {
        self == Self::PermissionDenied
    }
}

/// Progress of a locate request in the self-location panel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LocateStatus {
    #[default]
    Idle,
    Locating,
    Located(LatLng),
    Failed(GeoFailure),
}

impl LocateStatus {
    #[must_use]
    pub fn is_busy(self) -> bool {
        self == Self::Locating
    }

    /// Inline status line, if any.
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Idle | Self::Located(_) => None,
            Self::Locating => Some("Locating…"),
            Self::Failed(failure) => Some(failure.message()),
        }
    }
}

/// A stored location unless it is the `(0, 0)` sentinel.
#[must_use]
pub fn effective_location(stored: Option<LatLng>) -> Option<LatLng> {
    stored.filter(|p| !p.is_origin())
}

/// A browser fix, or `Unavailable` when it is exactly `(0, 0)`. Such a fix
/// would be stored and then read back as "no location".
///
/// # Errors
///
/// Returns [`GeoFailure::Unavailable`] for the `(0, 0)` sentinel.
pub fn accept_fix(fix: LatLng) -> Result<LatLng, GeoFailure> {
    effective_location(Some(fix)).ok_or(GeoFailure::Unavailable)
}

/// Ask the browser for one position fix.
///
/// # Errors
///
/// Returns the browser's failure reason, or `Unsupported` when there is no
/// geolocation API.
#[cfg(feature = "hydrate")]
pub async fn request_current_position() -> Result<LatLng, GeoFailure> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    type Reply = Rc<RefCell<Option<oneshot::Sender<Result<LatLng, GeoFailure>>>>>;

    fn reply(slot: &Reply, outcome: Result<LatLng, GeoFailure>) {
        if let Some(tx) = slot.borrow_mut().take() {
            let _ = tx.send(outcome);
        }
    }

    let geolocation = web_sys::window()
        .and_then(|w| w.navigator().geolocation().ok())
        .ok_or(GeoFailure::Unsupported)?;

    let (tx, rx) = oneshot::channel();
    let slot: Reply = Rc::new(RefCell::new(Some(tx)));
    let slot_err = slot.clone();

    let on_success = Closure::once_into_js(move |position: JsValue| {
        reply(&slot, position_lat_lng(&position).ok_or(GeoFailure::Unavailable).and_then(accept_fix));
    });
    let on_error = Closure::once_into_js(move |error: JsValue| {
        reply(&slot_err, Err(error_code(&error).map_or(GeoFailure::Unavailable, GeoFailure::from_code)));
    });

    let options = web_sys::PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_timeout(GEOLOCATION_TIMEOUT_MS);
    options.set_maximum_age(0);

    geolocation
        .get_current_position_with_error_callback_and_options(
            on_success.unchecked_ref(),
            Some(on_error.unchecked_ref()),
            &options,
        )
        .map_err(|_| GeoFailure::Unsupported)?;

    let outcome = rx.await.unwrap_or(Err(GeoFailure::Unavailable));
    match outcome {
        Ok(point) => log::info!("geolocation fix {:.5},{:.5}", point.lat, point.lng),
        Err(failure) => log::warn!("geolocation failed: {failure:?}"),
    }
    outcome
}

/// Ask the browser for one position fix.
///
/// # Errors
///
/// Always `Unsupported` outside the browser.
#[cfg(not(feature = "hydrate"))]
#[allow(clippy::unused_async)]
pub async fn request_current_position() -> Result<LatLng, GeoFailure> {
    Err(GeoFailure::Unsupported)
}

#[cfg(feature = "hydrate")]
fn position_lat_lng(position: &wasm_bindgen::JsValue) -> Option<LatLng> {
    let coords = js_sys::Reflect::get(position, &"coords".into()).ok()?;
    let lat = js_sys::Reflect::get(&coords, &"latitude".into()).ok()?.as_f64()?;
    let lng = js_sys::Reflect::get(&coords, &"longitude".into()).ok()?.as_f64()?;
    Some(LatLng::new(lat, lng))
}

#[cfg(feature = "hydrate")]
fn error_code(error: &wasm_bindgen::JsValue) -> Option<u16> {
    let code = js_sys::Reflect::get(error, &"code".into()).ok()?.as_f64()?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(code as u16)
}
