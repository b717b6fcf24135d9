//! Previous/next controls for a windowed page collection.

use leptos::prelude::*;

use crate::state::listing::PageListing;

/// Hidden when the whole collection fits in one window. `on_offset` receives
/// the offset of the window to load next.
#[component]
pub fn Pager(listing: Signal<PageListing>, on_offset: Callback<u32>) -> impl IntoView {
    view! {
        <Show when=move || {
            let l = listing.get();
            l.has_previous() || l.has_next()
        }>
            <nav class="pager" aria-label="Pagination">
                <button
                    class="btn"
                    disabled=move || !listing.get().has_previous() || listing.get().loading
                    on:click=move |_| on_offset.run(listing.get_untracked().previous_offset())
                >
                    "Previous"
                </button>
                <span class="pager__range">{move || listing.get().range_label()}</span>
                <button
                    class="btn"
                    disabled=move || !listing.get().has_next() || listing.get().loading
                    on:click=move |_| {
                        if let Some(next) = listing.get_untracked().next_offset() {
                            on_offset.run(next);
                        }
                    }
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
