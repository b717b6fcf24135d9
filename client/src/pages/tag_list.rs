//! Tag inventory route.

use leptos::prelude::*;

use crate::components::placeholder::Placeholder;
use crate::components::tag_card::TagCard;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::state::tags::TagListState;

#[component]
pub fn TagListPage() -> impl IntoView {
    let state = RwSignal::new(TagListState::default());

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api::list_tags().await;
            if let Err(e) = &result {
                log::error!("list tags failed: {e}");
            }
            state.update(|s| s.apply(result));
        });
    });

    view! {
        <section class="page-section">
            <h1 class="page-heading">"Tags"</h1>
            <Show when=move || !state.get().loading fallback=|| view! { <Placeholder text="Loading..." /> }>
                <Show when=move || !state.get().is_empty() fallback=|| view! { <Placeholder text="No tags yet." /> }>
                    <div class="tag-grid">
                        {move || {
                            state.get().tags.into_iter().map(|tag| view! { <TagCard tag=tag /> }).collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </section>
    }
}
