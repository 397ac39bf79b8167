//! "My location" panel: one-shot geolocation shown on the map.

use leptos::prelude::*;

use crate::app::LocationUpdater;
use crate::components::map_widget::{MapBackdrop, MapWidget};
use crate::state::dispatch::DispatchState;
use crate::state::map::MapLocation;
use crate::util::admin_view::FALLBACK_CENTER;
use crate::util::geolocation::{LocateStatus, effective_location, request_current_position};
use crate::util::markers::format_lat_lng;

/// Locate button, status line and a map with the device's position.
///
/// Successful fixes go through the [`LocationUpdater`] from context, which
/// stores them for the open client.
#[component]
pub fn SelfLocationPanel() -> impl IntoView {
    let dispatch = expect_context::<RwSignal<DispatchState>>();
    let updater = expect_context::<LocationUpdater>();
    let status = RwSignal::new(LocateStatus::Idle);

    let position = Memo::new(move |_| match status.get() {
        LocateStatus::Located(point) => Some(point),
        _ => dispatch.with(|d| effective_location(d.current_location())),
    });
    let client_name = move || dispatch.with(|d| d.current_client().map(|c| c.name.clone()));
    let locations = Signal::derive(move || {
        let id = dispatch.with(|d| d.current_client_id.clone()).unwrap_or_default();
        position
            .get()
            .map(|point| vec![MapLocation::current(&id, "You are here", point)])
            .unwrap_or_default()
    });
    let center = Signal::derive(move || position.get().unwrap_or(FALLBACK_CENTER));

    let on_locate = move |_| {
        if status.get_untracked().is_busy() {
            return;
        }
        status.set(LocateStatus::Locating);
        leptos::task::spawn_local(async move {
            match request_current_position().await {
                Ok(point) => {
                    updater.update(point);
                    status.set(LocateStatus::Located(point));
                }
                Err(failure) => {
                    if failure.needs_dialog() {
                        show_alert(failure.message());
                    }
                    status.set(LocateStatus::Failed(failure));
                }
            }
        });
    };

    view! {
        <section class="self-location">
            <header class="self-location__header">
                <h2>
                    {move || client_name().map_or_else(|| "My location".to_owned(), |name| format!("{name}'s location"))}
                </h2>
                <button
                    class="btn btn--primary"
                    disabled=move || status.get().is_busy()
                    on:click=on_locate
                >
                    {move || if status.get().is_busy() { "Locating…" } else { "Share my location" }}
                </button>
            </header>
            {move || {
                status
                    .get()
                    .message()
                    .map(|message| {
                        let failed = matches!(status.get_untracked(), LocateStatus::Failed(_));
                        view! {
                            <p class="self-location__status" class:self-location__status--error=failed>
                                {message}
                            </p>
                        }
                    })
            }}
            <p class="self-location__coords">
                {move || {
                    position
                        .get()
                        .map_or_else(|| "No location shared yet.".to_owned(), format_lat_lng)
                }}
            </p>
            <MapWidget locations=locations center=center follow_center=true backdrop=MapBackdrop::Tiles height="360px"/>
        </section>
    }
}

fn show_alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                log::warn!("alert dialog blocked: {message}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::warn!("{message}");
    }
}
