//! Single page route: rendered content, metadata, backlinks and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/page/{slug}`. The page fetch runs first; backlinks are only
//! requested once the page itself is known to exist. A successful delete
//! returns to the home route.
//!
//! ERROR HANDLING
//! ==============
//! Any page fetch failure renders "Page not found". A failed delete is logged
//! and the page stays in place with the dialog closed.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::markdown_view::MarkdownView;
use crate::components::page_listing::PageListingView;
use crate::components::placeholder::Placeholder;
use crate::components::tag_chips::TagChips;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::Page;
use crate::routes;
use crate::state::loadable::Loadable;
use crate::state::page_view::{DeleteStep, PageViewState};
use crate::util::navigation::use_redirect;
use crate::util::timestamp::datetime_label;

#[component]
pub fn PageViewPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.read().get("slug").unwrap_or_default());
    let state = RwSignal::new(PageViewState::default());
    let redirect = use_redirect();

    Effect::new(move || {
        let slug = slug.get();
        state.set(PageViewState::default());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api::get_page(&slug).await;
            if let Err(e) = &result {
                log::error!("load page {slug} failed: {e}");
            }
            let found = result.is_ok();
            state.update(|s| s.apply_fetch(result));
            if !found {
                return;
            }
            let backlinks = api::get_backlinks(&slug).await;
            if let Err(e) = &backlinks {
                log::error!("backlinks for {slug} failed: {e}");
            }
            state.update(|s| s.apply_backlinks(backlinks));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = slug;
    });

    let on_cancel = Callback::new(move |()| state.update(PageViewState::cancel_delete));
    let on_confirm = Callback::new(move |()| {
        let Some(target) = state.try_update(PageViewState::confirm_delete).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete_page(&target).await {
                Ok(()) => redirect.set(Some(routes::HOME.to_owned())),
                Err(e) => {
                    log::error!("delete page {target} failed: {e}");
                    state.update(PageViewState::delete_failed);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (target, redirect);
    });

    // Only re-render the article when the page itself changes, not on
    // backlink or dialog updates.
    let page = Memo::new(move |_| state.get().page);
    let backlinks = Signal::derive(move || state.get().backlinks);

    view! {
        <section class="page-section">
            {move || match page.get() {
                Loadable::Loading => view! { <Placeholder text="Loading..." /> }.into_any(),
                Loadable::Missing => view! { <Placeholder text="Page not found" /> }.into_any(),
                Loadable::Loaded(page) => {
                    view! {
                        <PageArticle page=page on_delete=Callback::new(move |()| state.update(PageViewState::request_delete)) />
                        <section class="backlinks">
                            <h2 class="backlinks__heading">"Backlinks"</h2>
                            <PageListingView listing=backlinks empty_message="No backlinks." />
                        </section>
                    }
                        .into_any()
                }
            }}
            <Show when=move || state.get().delete != DeleteStep::Idle>
                <ConfirmDialog
                    title="Delete Page"
                    message=format!(
                        "Are you sure you want to delete \"{}\"?",
                        page.get_untracked().loaded().map(|p| p.title.clone()).unwrap_or_default(),
                    )
                    confirm_label="Delete"
                    busy=Signal::derive(move || state.get().delete == DeleteStep::Deleting)
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            </Show>
        </section>
    }
}

/// Title, actions, tags, rendered body and timestamps for one page.
#[component]
fn PageArticle(page: Page, on_delete: Callback<()>) -> impl IntoView {
    let edit_href = routes::edit_path(&page.slug);
    let created = datetime_label(&page.created_at);
    let updated = datetime_label(&page.updated_at);
    let content = page.content;
    let source = Signal::derive(move || content.clone());

    view! {
        <article class="page-article">
            <header class="page-article__header">
                <h1 class="page-article__title">{page.title}</h1>
                <div class="page-article__actions">
                    <a class="btn btn--primary" href=edit_href>
                        "Edit"
                    </a>
                    <button class="btn btn--danger" on:click=move |_| on_delete.run(())>
                        "Delete"
                    </button>
                </div>
            </header>
            <TagChips tags=page.tags />
            <MarkdownView source=source />
            <footer class="page-article__meta">
                <span>{format!("Created: {created}")}</span>
                <span>{format!("Updated: {updated}")}</span>
            </footer>
        </article>
    }
}
