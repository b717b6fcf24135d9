//! Search route: keyword plus tag, metadata type and date-range filters.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header search box lands here with `?q=`; a non-blank keyword runs
//! immediately, and a header re-submit runs again even when the keyword is
//! unchanged. Installed plugins populate the metadata type filter.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::page_listing::PageListingView;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::state::search::{HeaderSearch, SearchState};

#[component]
pub fn SearchPage() -> impl IntoView {
    let query = use_query_map();
    let header = expect_context::<RwSignal<HeaderSearch>>();
    let state = RwSignal::new(SearchState::for_header(&header.get_untracked()));

    let run = move |offset: u32| {
        let Some(body) = state.try_update(|s| s.begin(offset)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api::search(&body).await;
            if let Err(e) = &result {
                log::error!("search failed: {e}");
            }
            state.update(|s| s.apply(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = body;
    };

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::list_plugins().await {
                Ok(plugins) => state.update(|s| s.set_plugins(&plugins)),
                Err(e) => log::error!("list plugins failed: {e}"),
            }
        });
    });

    Effect::new(move || {
        let q = query.read().get("q").unwrap_or_default();
        let submitted = header.get();
        if state.try_update(|s| s.sync_keyword(&q, &submitted)).unwrap_or(false) {
            run(0);
        }
    });

    let on_offset = Callback::new(run);
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(|s| s.form.has_partial_date_range()) {
            return;
        }
        run(0);
    };

    let results = Memo::new(move |_| state.get().results);
    let submitted = Memo::new(move |_| state.get().submitted);
    let metadata_types = Memo::new(move |_| state.get().metadata_types);
    let partial_range = Memo::new(move |_| state.get().form.has_partial_date_range());

    view! {
        <section class="page-section">
            <h1 class="page-heading">"Search"</h1>
            <form class="search-form" on:submit=on_submit>
                <label class="field search-form__keyword">
                    <span class="field__label">"Keyword"</span>
                    <input
                        class="field__input"
                        type="search"
                        placeholder="Search titles and content"
                        prop:value=move || state.get().form.q
                        on:input=move |ev| state.update(|s| s.form.q = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Tags"</span>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="Comma-separated"
                        prop:value=move || state.get().form.tags
                        on:input=move |ev| state.update(|s| s.form.tags = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Metadata type"</span>
                    <select
                        class="field__input"
                        prop:value=move || state.get().form.metadata_type
                        on:change=move |ev| state.update(|s| s.form.metadata_type = event_target_value(&ev))
                    >
                        <option value="">"Any"</option>
                        {move || {
                            metadata_types
                                .get()
                                .into_iter()
                                .map(|t| {
                                    let label = t.clone();
                                    view! { <option value=t>{label}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"From"</span>
                    <input
                        class="field__input"
                        type="date"
                        prop:value=move || state.get().form.start_date
                        on:input=move |ev| state.update(|s| s.form.start_date = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"To"</span>
                    <input
                        class="field__input"
                        type="date"
                        prop:value=move || state.get().form.end_date
                        on:input=move |ev| state.update(|s| s.form.end_date = event_target_value(&ev))
                    />
                </label>
                <Show when=move || partial_range.get()>
                    <p class="search-form__hint">"Set both From and To to filter by date."</p>
                </Show>
                <div class="form-actions">
                    <button
                        type="submit"
                        class="btn btn--primary"
                        disabled=move || results.get().loading || partial_range.get()
                    >
                        "Search"
                    </button>
                </div>
            </form>
            <Show when=move || submitted.get()>
                <PageListingView listing=results.into() empty_message="No matching pages." on_offset=on_offset />
            </Show>
        </section>
    }
}
