//! Admin dashboard: live map overview and client enrollment.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route. Records are refreshed by the app shell on a timer; this
//! page additionally refreshes right after a client is enrolled so the new
//! client shows up without waiting for the next poll.

use leptos::prelude::*;

use crate::app::refresh_records;
use crate::components::admin_map_panel::AdminMapPanel;
use crate::components::client_intake_form::ClientIntakeForm;
use crate::net::types::NewClientRow;
use crate::state::config::ConfigState;
use crate::state::dispatch::DispatchState;

/// Admin dashboard page.
#[component]
pub fn AdminPage() -> impl IntoView {
    let config = expect_context::<RwSignal<ConfigState>>();
    let dispatch = expect_context::<RwSignal<DispatchState>>();

    let on_created = Callback::new(move |row: NewClientRow| {
        log::info!("refreshing records after enrolling {}", row.id);
        refresh_records(config, dispatch);
    });

    let banner = move || {
        let message = config
            .with(|c| c.error.clone())
            .or_else(|| dispatch.with(|d| d.error.clone()))?;
        Some(view! {
            <div class="page-banner page-banner--error" role="alert">
                <span>{message}</span>
                <button
                    class="page-banner__dismiss"
                    aria-label="Dismiss"
                    on:click=move |_| {
                        config.update(|c| c.error = None);
                        dispatch.update(|d| d.error = None);
                    }
                >
                    "✕"
                </button>
            </div>
        })
    };

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Lifeline dispatch"</h1>
                <Show when=move || config.with(|c| c.loading) || dispatch.with(|d| d.loading)>
                    <span class="admin-page__loading">"Loading…"</span>
                </Show>
            </header>
            {banner}
            <main class="admin-page__body">
                <AdminMapPanel/>
                <ClientIntakeForm on_created=on_created/>
            </main>
        </div>
    }
}
