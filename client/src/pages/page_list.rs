//! Home route: every page, in the order the server returns them.

use leptos::prelude::*;

use crate::components::page_listing::PageListingView;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::state::listing::PageListing;

#[component]
pub fn PageListPage() -> impl IntoView {
    let listing = RwSignal::new(PageListing::default());

    let load = move |offset: u32| {
        listing.update(|l| l.begin(offset));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let limit = listing.get_untracked().limit;
            let result = api::list_pages(limit, offset).await;
            if let Err(e) = &result {
                log::error!("list pages failed: {e}");
            }
            listing.update(|l| l.apply_result(result));
        });
    };

    Effect::new(move || load(0));
    let on_offset = Callback::new(load);

    view! {
        <section class="page-section">
            <h1 class="page-heading">"All Pages"</h1>
            <PageListingView listing=listing.into() empty_message="No pages yet." on_offset=on_offset />
        </section>
    }
}
