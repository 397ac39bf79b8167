//! Client-facing page showing and sharing one client's location.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::self_location_panel::SelfLocationPanel;
use crate::state::dispatch::DispatchState;

/// `/me/:id` page. Marks the client from the route as the open client.
#[component]
pub fn MyLocationPage() -> impl IntoView {
    let dispatch = expect_context::<RwSignal<DispatchState>>();
    let params = use_params_map();
    let client_id = move || params.read().get("id");

    Effect::new(move || {
        let id = client_id();
        if dispatch.with_untracked(|d| d.current_client_id != id) {
            dispatch.update(|d| d.current_client_id = id);
        }
    });
    on_cleanup(move || dispatch.update(|d| d.current_client_id = None));

    let unknown_client = move || {
        dispatch.with(|d| !d.loading && d.error.is_none() && d.current_client().is_none() && !d.clients.is_empty())
    };

    view! {
        <div class="my-location-page">
            <Show when=unknown_client>
                <p class="page-banner">"This link does not match a registered client."</p>
            </Show>
            <SelfLocationPanel/>
        </div>
    }
}
