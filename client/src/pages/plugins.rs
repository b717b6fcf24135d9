//! Installed plugin inventory with an expandable metadata schema per plugin.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::placeholder::Placeholder;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::Plugin;
use crate::state::loadable::Loadable;
use crate::state::plugins::{PluginsState, SchemaField};

#[component]
pub fn PluginsPage() -> impl IntoView {
    let state = RwSignal::new(PluginsState::default());

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api::list_plugins().await;
            if let Err(e) = &result {
                log::error!("list plugins failed: {e}");
            }
            state.update(|s| s.apply(result));
        });
    });

    let on_toggle = Callback::new(move |metadata_type: String| {
        let fetch = state.try_update(|s| s.toggle_schema(&metadata_type)).unwrap_or(false);
        if !fetch {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api::get_plugin_schema(&metadata_type).await;
            if let Err(e) = &result {
                log::error!("schema for {metadata_type} failed: {e}");
            }
            state.update(|s| s.apply_schema(&metadata_type, result));
        });
    });

    let plugins = Memo::new(move |_| state.get().plugins);

    view! {
        <section class="page-section">
            <h1 class="page-heading">"Plugins"</h1>
            <Show when=move || !state.get().loading fallback=|| view! { <Placeholder text="Loading..." /> }>
                <Show
                    when=move || !state.get().is_empty()
                    fallback=|| view! { <Placeholder text="No plugins installed." /> }
                >
                    <ul class="plugin-list">
                        {move || {
                            plugins
                                .get()
                                .into_iter()
                                .map(|plugin| view! { <PluginCard plugin=plugin state=state on_toggle=on_toggle /> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
        </section>
    }
}

#[component]
fn PluginCard(plugin: Plugin, state: RwSignal<PluginsState>, on_toggle: Callback<String>) -> impl IntoView {
    let metadata_type = plugin.metadata_type.clone();
    let is_open = {
        let metadata_type = metadata_type.clone();
        move || metadata_type.is_some() && state.get().open == metadata_type
    };

    view! {
        <li class="plugin-card">
            <div class="plugin-card__header">
                <span class="plugin-card__name">{plugin.name}</span>
                <span class="plugin-card__version">{format!("v{}", plugin.version)}</span>
            </div>
            <p class="plugin-card__description">{plugin.description}</p>
            {metadata_type
                .map(|t| {
                    let label = t.clone();
                    let is_open = is_open.clone();
                    view! {
                        <div class="plugin-card__schema">
                            <span class="plugin-card__type">{format!("Metadata type: {label}")}</span>
                            <button class="btn" on:click=move |_| on_toggle.run(t.clone())>
                                {move || if is_open() { "Hide schema" } else { "Show schema" }}
                            </button>
                        </div>
                    }
                })}
            <Show when=is_open>
                <SchemaPanel schema=Signal::derive(move || state.get().schema) />
            </Show>
        </li>
    }
}

#[component]
fn SchemaPanel(schema: Signal<Loadable<Vec<SchemaField>>>) -> impl IntoView {
    move || match schema.get() {
        Loadable::Loading => view! { <Placeholder text="Loading..." /> }.into_any(),
        Loadable::Missing => view! { <Placeholder text="Schema unavailable." /> }.into_any(),
        Loadable::Loaded(fields) if fields.is_empty() => {
            view! { <Placeholder text="No fields declared." /> }.into_any()
        }
        Loadable::Loaded(fields) => {
            view! {
                <table class="schema-table">
                    <thead>
                        <tr>
                            <th>"Field"</th>
                            <th>"Type"</th>
                            <th>"Required"</th>
                            <th>"Default"</th>
                            <th>"Description"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {fields
                            .into_iter()
                            .map(|field| {
                                view! {
                                    <tr>
                                        <td class="schema-table__name">{field.name}</td>
                                        <td>{field.field_type}</td>
                                        <td>{if field.required { "yes" } else { "no" }}</td>
                                        <td>{field.default.unwrap_or_default()}</td>
                                        <td>{field.description}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            }
                .into_any()
        }
    }
}
