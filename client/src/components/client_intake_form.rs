//! Admin form for enrolling a new client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submitting runs `util::intake::submit_client_intake` against the hosted
//! auth + database provider. The address field offers debounced
//! autocomplete from the geocoder; picking a suggestion also records its
//! coordinates as the client's initial location.

use leptos::prelude::*;

use crate::net::geocode::Geocoder;
use crate::net::supabase::SupabaseClient;
use crate::net::types::{AddressSuggestion, LatLng, NewClientRow};
use crate::state::config::{CONFIG_MISSING_MESSAGE, ConfigState};
use crate::util::debounce::{Debouncer, SEARCH_DEBOUNCE_MS, debounced_search, should_search, wait_ms};
use crate::util::intake::{IntakeForm, submit_client_intake};

/// Client intake form. `on_created` receives the inserted row.
#[component]
pub fn ClientIntakeForm(#[prop(optional)] on_created: Option<Callback<NewClientRow>>) -> impl IntoView {
    let config = expect_context::<RwSignal<ConfigState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let emergency_contact = RwSignal::new(String::new());
    let location = RwSignal::new(None::<LatLng>);

    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let suggestions = RwSignal::new(Vec::<AddressSuggestion>::new());
    let debouncer = StoredValue::new(Debouncer::new());

    let config_ready = move || config.with(|c| c.config.is_some());

    let reset = move || {
        for field in [name, email, phone, address, emergency_contact] {
            field.set(String::new());
        }
        location.set(None);
        suggestions.set(Vec::new());
        debouncer.update_value(Debouncer::cancel);
    };

    let on_address_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        address.set(value.clone());
        location.set(None);
        if !should_search(&value) {
            debouncer.update_value(Debouncer::cancel);
            suggestions.set(Vec::new());
            return;
        }
        let Some(geocoder_url) = config.with_untracked(|c| c.config.as_ref().map(|cfg| cfg.geocoder_url.clone())) else {
            return;
        };
        let Some(ticket) = debouncer.try_update_value(|d| d.schedule(&value)) else {
            return;
        };
        let geocoder = Geocoder::new(&geocoder_url);
        leptos::task::spawn_local(async move {
            let take = move || debouncer.try_update_value(|d| d.take_if_current(ticket)).flatten();
            let Some(found) = debounced_search(&geocoder, wait_ms(SEARCH_DEBOUNCE_MS), take).await else {
                return;
            };
            // A newer keystroke may have arrived while the request was in flight.
            if debouncer.try_with_value(|d| d.is_latest(ticket)).unwrap_or(false) {
                suggestions.set(found);
            }
        });
    };

    let pick_suggestion = move |suggestion: AddressSuggestion| {
        debouncer.update_value(Debouncer::cancel);
        address.set(suggestion.display_name);
        location.set(Some(suggestion.location));
        suggestions.set(Vec::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let form = IntakeForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            address: address.get_untracked(),
            emergency_contact: emergency_contact.get_untracked(),
            location: location.get_untracked(),
        };
        if let Err(message) = form.validate() {
            error.set(Some(message.to_owned()));
            return;
        }
        let Some(client) = config.with_untracked(|c| c.config.as_ref().map(SupabaseClient::from_config)) else {
            error.set(Some(CONFIG_MISSING_MESSAGE.to_owned()));
            return;
        };

        submitting.set(true);
        error.set(None);
        notice.set(None);
        leptos::task::spawn_local(async move {
            match submit_client_intake(&client, &client, &form).await {
                Ok(row) => {
                    reset();
                    notice.set(Some(format!("{} was added.", row.name)));
                    if let Some(on_created) = on_created {
                        on_created.run(row);
                    }
                }
                Err(err) => {
                    log::warn!("client intake failed: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <form class="intake-form" on:submit=on_submit novalidate>
            <h2 class="intake-form__title">"New client"</h2>

            <Show when=move || !config_ready()>
                <p class="intake-form__placeholder">{CONFIG_MISSING_MESSAGE}</p>
            </Show>

            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <div class="intake-form__error" role="alert">
                                <span>{message}</span>
                                <button
                                    type="button"
                                    class="intake-form__dismiss"
                                    aria-label="Dismiss"
                                    on:click=move |_| error.set(None)
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
            }}
            {move || notice.get().map(|message| view! { <div class="intake-form__notice">{message}</div> })}

            <label class="intake-form__field">
                <span>"Name"</span>
                <input
                    type="text"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="intake-form__field">
                <span>"Email"</span>
                <input
                    type="email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="intake-form__field">
                <span>"Phone"</span>
                <input
                    type="tel"
                    required
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
            </label>
            <label class="intake-form__field intake-form__field--address">
                <span>"Address"</span>
                <input type="text" autocomplete="off" prop:value=move || address.get() on:input=on_address_input />
                <Show when=move || suggestions.with(|s| !s.is_empty())>
                    <ul class="intake-form__suggestions" role="listbox">
                        {move || {
                            suggestions
                                .get()
                                .into_iter()
                                .map(|suggestion| {
                                    let label = suggestion.display_name.clone();
                                    view! {
                                        <li
                                            class="intake-form__suggestion"
                                            role="option"
                                            on:mousedown=move |ev: leptos::ev::MouseEvent| {
                                                ev.prevent_default();
                                                pick_suggestion(suggestion.clone());
                                            }
                                        >
                                            {label}
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </label>
            <label class="intake-form__field">
                <span>"Emergency contact"</span>
                <input
                    type="text"
                    prop:value=move || emergency_contact.get()
                    on:input=move |ev| emergency_contact.set(event_target_value(&ev))
                />
            </label>

            <button
                type="submit"
                class="btn btn--primary"
                disabled=move || submitting.get() || !config_ready()
            >
                {move || if submitting.get() { "Adding…" } else { "Add client" }}
            </button>
        </form>
    }
}
