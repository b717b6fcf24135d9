//! Edit route for an existing page.
//!
//! ERROR HANDLING
//! ==============
//! A failed load renders "Page not found" with no form. A failed save is
//! logged and the form stays editable with the user's input.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::editor_form::EditorForm;
use crate::components::placeholder::Placeholder;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::routes;
use crate::state::editor::{EditPageState, FormEdit};
use crate::util::navigation::use_redirect;

#[component]
pub fn PageEditorPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.read().get("slug").unwrap_or_default());
    let state = RwSignal::new(EditPageState::default());
    let redirect = use_redirect();

    Effect::new(move || {
        let slug = slug.get();
        state.set(EditPageState::default());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api::get_page(&slug).await;
            if let Err(e) = &result {
                log::error!("load page {slug} for edit failed: {e}");
            }
            state.update(|s| s.apply_fetch(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = slug;
    });

    let on_edit = Callback::new(move |edit: FormEdit| state.update(|s| s.form.apply(edit)));
    let on_cancel = Callback::new(move |()| redirect.set(Some(routes::page_path(&slug.get_untracked()))));
    let on_submit = Callback::new(move |()| {
        let Some(body) = state.try_update(|s| s.form.submit_update()).flatten() else {
            return;
        };
        let target = slug.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::update_page(&target, &body).await {
                Ok(_) => redirect.set(Some(routes::page_path(&target))),
                Err(e) => {
                    log::error!("update page {target} failed: {e}");
                    state.update(|s| s.form.submit_failed());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (body, target);
    });

    let form = Signal::derive(move || state.get().form);

    view! {
        <section class="page-section">
            <Show when=move || !state.get().source.is_loading() fallback=|| view! { <Placeholder text="Loading..." /> }>
                <Show
                    when=move || !state.get().source.is_missing()
                    fallback=|| view! { <Placeholder text="Page not found" /> }
                >
                    <h1 class="page-heading">"Edit Page"</h1>
                    <EditorForm
                        form=form
                        on_edit=on_edit
                        on_submit=on_submit
                        on_cancel=on_cancel
                        submit_label="Save Changes"
                    />
                </Show>
            </Show>
        </section>
    }
}
