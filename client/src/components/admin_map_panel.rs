//! Admin overview: live map of clients and active alerts plus counters.

use leptos::prelude::*;

use crate::components::map_widget::{MapBackdrop, MapWidget};
use crate::state::dispatch::DispatchState;
use crate::util::admin_view::{
    MapFrame, RECENT_ALERT_LIMIT, admin_map_frame, admin_stats, build_admin_markers, current_time, recent_alerts,
    settled_admin_frame,
};

/// Map plus sidebar statistics, driven by the shared dispatch records.
#[component]
pub fn AdminMapPanel() -> impl IntoView {
    let dispatch = expect_context::<RwSignal<DispatchState>>();

    let markers = Memo::new(move |_| dispatch.with(|d| build_admin_markers(&d.clients, &d.alerts)));
    // Framed once, when the first records with locations arrive. Later polls
    // only move markers, never the admin's view.
    let frame = Memo::new(move |prev: Option<&Option<MapFrame>>| {
        let prev = prev.copied().flatten();
        if prev.is_some() {
            return prev;
        }
        let loading = dispatch.with(|d| d.loading);
        markers.with(|m| settled_admin_frame(prev, loading, m))
    });
    let stats = Memo::new(move |_| dispatch.with(|d| admin_stats(&d.clients, &d.alerts)));
    let recent = move || dispatch.with(|d| recent_alerts(&d.clients, &d.alerts, current_time(), RECENT_ALERT_LIMIT));

    view! {
        <section class="admin-map">
            <div class="admin-map__map">
                {move || {
                    let MapFrame { center, zoom } = frame.get().unwrap_or_else(|| admin_map_frame(&[]));
                    view! {
                        <MapWidget
                            locations=markers
                            center=Signal::stored(center)
                            zoom=zoom
                            backdrop=MapBackdrop::Tiles
                            height="520px"
                        />
                    }
                }}
            </div>
            <aside class="admin-map__sidebar">
                <div class="admin-map__stats">
                    <div class="admin-map__stat">
                        <span class="admin-map__stat-value">{move || stats.get().online_clients}</span>
                        <span class="admin-map__stat-label">"Online clients"</span>
                    </div>
                    <div class="admin-map__stat admin-map__stat--alert">
                        <span class="admin-map__stat-value">{move || stats.get().active_alerts}</span>
                        <span class="admin-map__stat-label">"Active alerts"</span>
                    </div>
                    <div class="admin-map__stat">
                        <span class="admin-map__stat-value">{move || stats.get().tracked_clients}</span>
                        <span class="admin-map__stat-label">"On the map"</span>
                    </div>
                </div>
                <h3 class="admin-map__heading">"Recent alerts"</h3>
                <ul class="admin-map__recent">
                    {move || {
                        let rows = recent();
                        if rows.is_empty() {
                            return view! { <li class="admin-map__empty">"No alerts yet."</li> }.into_any();
                        }
                        rows.into_iter()
                            .map(|row| {
                                view! {
                                    <li class="admin-map__recent-row">
                                        <span class="admin-map__dot" style=format!("background:{};", row.color)></span>
                                        <span class="admin-map__recent-icon">{row.icon}</span>
                                        <span class="admin-map__recent-name">{row.client_name}</span>
                                        <span class="admin-map__recent-status">{row.status_label}</span>
                                        <span class="admin-map__recent-age">{row.age}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </ul>
            </aside>
        </section>
    }
}
