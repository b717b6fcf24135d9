//! Pages carrying one tag.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::page_listing::PageListingView;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::routes;
use crate::state::listing::PageListing;

#[component]
pub fn TagPagesPage() -> impl IntoView {
    let params = use_params_map();
    let name = Memo::new(move |_| params.read().get("name").unwrap_or_default());
    let listing = RwSignal::new(PageListing::default());

    Effect::new(move || {
        let tag = name.get();
        listing.set(PageListing::default());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api::get_pages_by_tag(&tag).await;
            if let Err(e) = &result {
                log::error!("pages for tag {tag} failed: {e}");
            }
            listing.update(|l| l.apply_result(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = tag;
    });

    view! {
        <section class="page-section">
            <a class="back-link" href=routes::TAGS>
                "All tags"
            </a>
            <h1 class="page-heading">{move || format!("Tag: {}", name.get())}</h1>
            <PageListingView listing=listing.into() empty_message="No pages with this tag." />
        </section>
    }
}
