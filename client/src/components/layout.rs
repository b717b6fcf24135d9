//! Application chrome: header with brand, navigation and quick search.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every route. The search box hands its keyword to the search route
//! through the `q` query parameter so results are linkable, and records the
//! submit in the shared `HeaderSearch` signal so an unchanged keyword still
//! re-runs.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes;
use crate::state::search::HeaderSearch;

/// Header plus main content area.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let navigate = use_navigate();
    let header = expect_context::<RwSignal<HeaderSearch>>();
    let keyword = RwSignal::new(String::new());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let submitted = keyword.get_untracked();
        keyword.set(String::new());
        navigate(&routes::search_path(&submitted), NavigateOptions::default());
        header.update(|h| h.submit(&submitted));
    };

    view! {
        <div class="app-shell">
            <header class="app-header">
                <a class="app-header__brand" href=routes::HOME>
                    "NoteNest"
                </a>
                <nav class="app-header__nav">
                    <a class="app-header__link" href=routes::HOME>
                        "Pages"
                    </a>
                    <a class="app-header__link" href=routes::TAGS>
                        "Tags"
                    </a>
                    <a class="app-header__link" href=routes::SEARCH>
                        "Search"
                    </a>
                    <a class="app-header__link" href=routes::PLUGINS>
                        "Plugins"
                    </a>
                </nav>
                <form class="app-header__search" on:submit=on_search>
                    <input
                        class="app-header__search-input"
                        type="search"
                        placeholder="Search pages"
                        aria-label="Search pages"
                        prop:value=move || keyword.get()
                        on:input=move |ev| keyword.set(event_target_value(&ev))
                    />
                </form>
                <a class="btn btn--primary" href=routes::CREATE>
                    "New Page"
                </a>
            </header>
            <main class="app-main">{children()}</main>
        </div>
    }
}
