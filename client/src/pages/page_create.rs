//! New page route.

use leptos::prelude::*;

use crate::components::editor_form::EditorForm;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::routes;
use crate::state::editor::{EditorState, FormEdit};
use crate::util::navigation::use_redirect;

/// Create form. On success navigates to the new page using the slug the
/// server assigned; on failure the form is re-enabled with input intact.
#[component]
pub fn PageCreatePage() -> impl IntoView {
    let form = RwSignal::new(EditorState::default());
    let redirect = use_redirect();

    let on_edit = Callback::new(move |edit: FormEdit| form.update(|f| f.apply(edit)));
    let on_cancel = Callback::new(move |()| redirect.set(Some(routes::HOME.to_owned())));
    let on_submit = Callback::new(move |()| {
        let Some(body) = form.try_update(EditorState::submit_create).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::create_page(&body).await {
                Ok(created) => redirect.set(Some(EditorState::created_target(&created))),
                Err(e) => {
                    log::error!("create page failed: {e}");
                    form.update(EditorState::submit_failed);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = body;
    });

    view! {
        <section class="page-section">
            <h1 class="page-heading">"New Page"</h1>
            <EditorForm
                form=form.into()
                on_edit=on_edit
                on_submit=on_submit
                on_cancel=on_cancel
                submit_label="Create Page"
                show_slug=true
            />
        </section>
    }
}
