//! Page collection rendering shared by the list, tag, search and backlink
//! views.
//!
//! DESIGN
//! ======
//! Loading, empty and populated states are decided by `PageListing` alone so
//! every collection reads the same way. The pager only renders when the
//! caller supplies an offset callback.

use leptos::prelude::*;

use crate::components::pager::Pager;
use crate::components::placeholder::Placeholder;
use crate::components::tag_chips::TagChips;
use crate::net::types::Page;
use crate::routes;
use crate::state::listing::PageListing;
use crate::util::timestamp::date_label;

/// A loading line, the empty message, or the rows plus an optional pager.
#[component]
pub fn PageListingView(
    listing: Signal<PageListing>,
    empty_message: &'static str,
    #[prop(optional)] on_offset: Option<Callback<u32>>,
) -> impl IntoView {
    view! {
        <Show when=move || !listing.get().loading fallback=|| view! { <Placeholder text="Loading..." /> }>
            <Show
                when=move || !listing.get().is_empty()
                fallback=move || view! { <Placeholder text=empty_message /> }
            >
                <ul class="page-list">
                    {move || {
                        listing.get().items.into_iter().map(|page| view! { <PageRow page=page /> }).collect::<Vec<_>>()
                    }}
                </ul>
                {on_offset.map(|on_offset| view! { <Pager listing=listing on_offset=on_offset /> })}
            </Show>
        </Show>
    }
}

/// One page entry: title link, last-updated date and tag chips.
#[component]
pub fn PageRow(page: Page) -> impl IntoView {
    let href = routes::page_path(&page.slug);
    let updated = date_label(&page.updated_at);
    view! {
        <li class="page-row">
            <a class="page-row__link" href=href>
                <span class="page-row__title">{page.title}</span>
                <span class="page-row__meta">{format!("Updated: {updated}")}</span>
            </a>
            <TagChips tags=page.tags />
        </li>
    }
}
