//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell loads `/api/config`, then keeps `DispatchState` fresh by polling
//! the row endpoints every [`RECORD_REFRESH_SECS`]. A failed config load is
//! attempted again on the next tick. Pages read the shared signals from
//! context; only the admin page asks for an extra refresh after enrollment.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::supabase::SupabaseClient;
use crate::net::types::LatLng;
use crate::pages::{admin::AdminPage, my_location::MyLocationPage};
use crate::state::config::ConfigState;
use crate::state::dispatch::DispatchState;

/// Seconds between background record refreshes.
pub const RECORD_REFRESH_SECS: u64 = 10;

/// Stores a new position for the open client: updates shared state at once
/// and persists it in the background.
#[derive(Clone, Copy)]
pub struct LocationUpdater(Callback<LatLng>);

impl LocationUpdater {
    pub fn new(update: Callback<LatLng>) -> Self {
        Self(update)
    }

    pub fn update(&self, location: LatLng) {
        self.0.run(location);
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = RwSignal::new(ConfigState { loading: true, ..ConfigState::default() });
    let dispatch = RwSignal::new(DispatchState { loading: true, ..DispatchState::default() });

    provide_context(config);
    provide_context(dispatch);
    provide_context(location_updater(config, dispatch));

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                if config.with_untracked(|c| c.config.is_none()) {
                    load_config(config).await;
                }
                match supabase_client(config) {
                    Some(client) => load_records(&client, dispatch).await,
                    None => dispatch.update(|d| d.loading = false),
                }
                gloo_timers::future::sleep(std::time::Duration::from_secs(RECORD_REFRESH_SECS)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/lifeline.css"/>
        <Title text="Lifeline"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AdminPage/>
                <Route path=(StaticSegment("me"), ParamSegment("id")) view=MyLocationPage/>
            </Routes>
        </Router>
    }
}

/// Reload records now, outside the regular poll.
pub fn refresh_records(config: RwSignal<ConfigState>, dispatch: RwSignal<DispatchState>) {
    let Some(client) = supabase_client(config) else {
        return;
    };
    leptos::task::spawn_local(async move {
        load_records(&client, dispatch).await;
    });
}

/// Fetch clients and alerts and replace them in `dispatch`. Failures keep
/// the previous records and set `error`.
pub async fn load_records(client: &SupabaseClient, dispatch: RwSignal<DispatchState>) {
    match futures::future::try_join(client.fetch_clients(), client.fetch_alerts()).await {
        Ok((clients, alerts)) => dispatch.update(|d| d.replace_records(clients, alerts)),
        Err(err) => {
            log::warn!("record refresh failed: {err}");
            dispatch.update(|d| {
                d.loading = false;
                d.error = Some(err.to_string());
            });
        }
    }
}

#[cfg(feature = "hydrate")]
async fn load_config(config: RwSignal<ConfigState>) {
    match crate::net::api::fetch_public_config().await {
        Ok(loaded) => config.set(ConfigState { config: Some(loaded), loading: false, error: None }),
        Err(err) => {
            log::error!("config load failed: {err}");
            config.set(ConfigState { config: None, loading: false, error: Some(err.to_string()) });
        }
    }
}

fn supabase_client(config: RwSignal<ConfigState>) -> Option<SupabaseClient> {
    config.with_untracked(|c| c.config.as_ref().map(SupabaseClient::from_config))
}

fn location_updater(config: RwSignal<ConfigState>, dispatch: RwSignal<DispatchState>) -> LocationUpdater {
    LocationUpdater::new(Callback::new(move |location: LatLng| {
        let Some(client_id) = dispatch.with_untracked(|d| d.current_client_id.clone()) else {
            log::warn!("location fix with no open client");
            return;
        };
        dispatch.update(|d| {
            d.set_client_location(&client_id, location);
        });
        let Some(client) = supabase_client(config) else {
            return;
        };
        leptos::task::spawn_local(async move {
            if let Err(err) = client.update_client_location(&client_id, location).await {
                log::warn!("location update for {client_id} failed: {err}");
            }
        });
    }))
}
