//! Interactive point map used by the admin and self-location panels.
//!
//! DESIGN
//! ======
//! All geometry lives in `mapview::Viewport`; this component only owns the
//! viewport signal, pointer/button wiring and DOM placement. Markers are
//! absolutely positioned by percentage offsets, tiles by pixel offsets.
//! Tiles are keyed so a tile that failed to load stays hidden for as long as
//! it remains on screen instead of being requested again.

use leptos::prelude::*;
use mapview::consts::DEFAULT_ZOOM;
use mapview::tiles::TilePlacement;
use mapview::viewport::{PanDirection, Viewport};

use crate::net::types::LatLng;
use crate::state::map::MapLocation;
use crate::util::markers::{alert_status_label, category_label, format_lat_lng, marker_style};

/// What is drawn behind the markers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MapBackdrop {
    /// Decorative CSS grid, no network traffic.
    Gradient,
    /// Street or satellite raster tiles.
    #[default]
    Tiles,
}

/// Map of point markers with pan, zoom, style and selection.
///
/// `center` and `zoom` set the initial view and the recenter target. With
/// `follow_center`, later changes to `center` also move the view; otherwise
/// the user's pan is left alone. `on_select` fires when a marker is clicked.
#[component]
pub fn MapWidget(
    #[prop(into)] locations: Signal<Vec<MapLocation>>,
    #[prop(into)] center: Signal<LatLng>,
    #[prop(default = DEFAULT_ZOOM)] zoom: u8,
    #[prop(optional)] follow_center: bool,
    #[prop(optional)] backdrop: MapBackdrop,
    #[prop(optional)] on_select: Option<Callback<MapLocation>>,
    #[prop(default = "420px")] height: &'static str,
) -> impl IntoView {
    let viewport = RwSignal::new(Viewport::new(center.get_untracked(), zoom));
    let selected = RwSignal::new(None::<MapLocation>);
    let hovered = RwSignal::new(None::<String>);
    let drag_from = RwSignal::new(None::<(f64, f64)>);
    let host_ref = NodeRef::<leptos::html::Div>::new();

    // Skips the first run; the viewport already starts at `center`.
    if follow_center {
        Effect::new(move |prev: Option<LatLng>| {
            let next = center.get();
            if prev.is_some_and(|p| p != next) {
                viewport.update(|v| v.set_center(next));
            }
            next
        });
    }

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            if let Some(host) = host_ref.get() {
                measure_host(&host, viewport);
            }
        });
    }

    let select = move |location: MapLocation| {
        if let Some(on_select) = on_select {
            on_select.run(location.clone());
        }
        selected.set(Some(location));
    };

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(host) = host_ref.get_untracked() {
                measure_host(&host, viewport);
            }
        }
        drag_from.set(Some((f64::from(ev.client_x()), f64::from(ev.client_y()))));
    };
    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let Some((x0, y0)) = drag_from.get_untracked() else {
            return;
        };
        let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        drag_from.set(Some((x, y)));
        viewport.update(|v| v.pan_by_pixels(x - x0, y - y0));
    };
    let end_drag = move |_ev: leptos::ev::PointerEvent| drag_from.set(None);

    let pan = move |direction: PanDirection| viewport.update(|v| v.pan(direction));
    let recenter = move |_| viewport.update(|v| v.recenter(center.get_untracked(), zoom));

    let tiles = Memo::new(move |_| match backdrop {
        MapBackdrop::Tiles => viewport.with(Viewport::tiles),
        MapBackdrop::Gradient => Vec::new(),
    });

    let markers = move || {
        let vp = viewport.get();
        locations
            .get()
            .into_iter()
            .filter_map(|location| {
                let offset = vp.project(location.position);
                offset.is_visible().then_some((location, offset))
            })
            .map(|(location, offset)| {
                let style = marker_style(&location.category);
                let hover_in = location.id.clone();
                let hover_id = location.id.clone();
                let name = location.name.clone();
                let label = location.name.clone();
                view! {
                    <button
                        class=style.class()
                        style=format!("{}--marker-color:{};", offset.css(), style.color)
                        aria-label=label
                        on:pointerdown=move |ev: leptos::ev::PointerEvent| ev.stop_propagation()
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.stop_propagation();
                            select(location.clone());
                        }
                        on:mouseenter=move |_| hovered.set(Some(hover_in.clone()))
                        on:mouseleave=move |_| hovered.set(None)
                    >
                        <span class="map-marker__icon">{style.icon}</span>
                        <Show when=move || hovered.get().as_deref() == Some(hover_id.as_str())>
                            <span class="map-marker__tooltip">{name.clone()}</span>
                        </Show>
                    </button>
                }
            })
            .collect_view()
    };

    let detail = move || {
        selected.get().map(|location| {
            let status = location.alert_status().map(alert_status_label);
            view! {
                <div class="map-widget__detail" on:pointerdown=move |ev: leptos::ev::PointerEvent| ev.stop_propagation()>
                    <div class="map-widget__detail-header">
                        <span class="map-widget__detail-kind">{category_label(&location.category)}</span>
                        <button
                            class="map-widget__detail-close"
                            aria-label="Close details"
                            on:click=move |_| selected.set(None)
                        >
                            "✕"
                        </button>
                    </div>
                    <strong class="map-widget__detail-name">{location.name.clone()}</strong>
                    {status.map(|s| view! { <span class="map-widget__detail-status">{s}</span> })}
                    <span class="map-widget__detail-coords">{format_lat_lng(location.position)}</span>
                </div>
            }
        })
    };

    view! {
        <div
            class="map-widget"
            class:map-widget--gradient={backdrop == MapBackdrop::Gradient}
            class:map-widget--dragging=move || drag_from.get().is_some()
            style=format!("height:{height};")
            node_ref=host_ref
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=end_drag
            on:pointerleave=end_drag
        >
            <div class="map-widget__tiles" aria-hidden="true">
                <For each=move || tiles.get() key=TilePlacement::key children=move |tile| view! { <MapTile tile tiles/> }/>
            </div>
            <div class="map-widget__markers">{markers}</div>
            {detail}
            <div class="map-widget__controls" on:pointerdown=move |ev: leptos::ev::PointerEvent| ev.stop_propagation()>
                <button
                    class="map-widget__btn"
                    title="Zoom in"
                    disabled=move || !viewport.with(Viewport::can_zoom_in)
                    on:click=move |_| {
                        viewport.update(|v| {
                            v.zoom_in();
                        });
                    }
                >
                    "+"
                </button>
                <span class="map-widget__zoom">{move || format!("z{}", viewport.with(Viewport::zoom))}</span>
                <button
                    class="map-widget__btn"
                    title="Zoom out"
                    disabled=move || !viewport.with(Viewport::can_zoom_out)
                    on:click=move |_| {
                        viewport.update(|v| {
                            v.zoom_out();
                        });
                    }
                >
                    "−"
                </button>
                <div class="map-widget__pad">
                    <button class="map-widget__btn" title="Pan north" on:click=move |_| pan(PanDirection::North)>"▲"</button>
                    <button class="map-widget__btn" title="Pan west" on:click=move |_| pan(PanDirection::West)>"◀"</button>
                    <button class="map-widget__btn" title="Recenter" on:click=recenter>"◎"</button>
                    <button class="map-widget__btn" title="Pan east" on:click=move |_| pan(PanDirection::East)>"▶"</button>
                    <button class="map-widget__btn" title="Pan south" on:click=move |_| pan(PanDirection::South)>"▼"</button>
                </div>
                <Show when=move || backdrop == MapBackdrop::Tiles>
                    <button class="map-widget__btn map-widget__style" on:click=move |_| viewport.update(Viewport::toggle_style)>
                        {move || viewport.with(|v| v.style().toggled().label())}
                    </button>
                </Show>
            </div>
            <Show when=move || backdrop == MapBackdrop::Tiles>
                <div class="map-widget__attribution">{move || viewport.with(|v| v.style().attribution())}</div>
            </Show>
        </div>
    }
}

/// One raster tile. Position follows the shared tile list; a load failure
/// hides the tile for the rest of its life.
#[component]
fn MapTile(tile: TilePlacement, tiles: Memo<Vec<TilePlacement>>) -> impl IntoView {
    let failed = RwSignal::new(false);
    let key = tile.key();
    let style = move || {
        let placement = tiles.with(|all| all.iter().find(|t| t.key() == key).map(|t| (t.left_px, t.top_px)));
        let (left, top) = placement.unwrap_or((tile.left_px, tile.top_px));
        let display = if failed.get() { "none" } else { "block" };
        format!("left:{left:.1}px;top:{top:.1}px;display:{display};")
    };

    view! {
        <img
            class="map-widget__tile"
            src=tile.url.clone()
            alt=""
            draggable="false"
            style=style
            on:error=move |_| failed.set(true)
        />
    }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::float_cmp)]
fn measure_host(host: &web_sys::HtmlDivElement, viewport: RwSignal<Viewport>) {
    let width = f64::from(host.client_width());
    let height = f64::from(host.client_height());
    if width <= 0.0 || height <= 0.0 {
        return;
    }
    let unchanged = viewport.with_untracked(|v| v.width_px() == width && v.height_px() == height);
    if !unchanged {
        viewport.update(|v| v.set_size(width, height));
    }
}
