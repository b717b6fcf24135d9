//! Shared create/edit form: title, optional slug, Markdown body and the
//! edit/preview/split view toggle.
//!
//! DESIGN
//! ======
//! The form never writes state itself. Every keystroke and view toggle is a
//! `FormEdit` handed to `on_edit`, so create and edit routes can keep the
//! form inside whatever state shape they own.

use leptos::prelude::*;

use crate::components::markdown_view::MarkdownView;
use crate::state::editor::{EditorState, FormEdit, ViewMode};

#[component]
pub fn EditorForm(
    form: Signal<EditorState>,
    on_edit: Callback<FormEdit>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
    submit_label: &'static str,
    #[prop(optional)] show_slug: bool,
) -> impl IntoView {
    let preview_source = Signal::derive(move || form.get().content);

    view! {
        <form
            class="editor-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <label class="field">
                <span class="field__label">"Title"</span>
                <input
                    class="field__input"
                    type="text"
                    required=true
                    prop:value=move || form.get().title
                    on:input=move |ev| on_edit.run(FormEdit::Title(event_target_value(&ev)))
                />
            </label>
            <Show when=move || show_slug>
                <label class="field">
                    <span class="field__label">"Slug (optional)"</span>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="Derived from the title when left blank"
                        prop:value=move || form.get().slug
                        on:input=move |ev| on_edit.run(FormEdit::Slug(event_target_value(&ev)))
                    />
                </label>
            </Show>
            <div class="view-mode-tabs" role="tablist">
                {ViewMode::ALL
                    .into_iter()
                    .map(|mode| {
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class="view-mode-tabs__tab"
                                class:view-mode-tabs__tab--active=move || form.get().view_mode == mode
                                on:click=move |_| on_edit.run(FormEdit::ViewMode(mode))
                            >
                                {mode.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="editor-panes" class:editor-panes--split=move || form.get().view_mode == ViewMode::Split>
                <Show when=move || form.get().view_mode.shows_editor()>
                    <label class="editor-panes__pane field">
                        <span class="field__label">"Content (Markdown)"</span>
                        <textarea
                            class="field__input field__input--mono"
                            rows="20"
                            required=true
                            prop:value=move || form.get().content
                            on:input=move |ev| on_edit.run(FormEdit::Content(event_target_value(&ev)))
                        ></textarea>
                    </label>
                </Show>
                <Show when=move || form.get().view_mode.shows_preview()>
                    <div class="editor-panes__pane">
                        <span class="field__label">"Preview"</span>
                        <MarkdownView source=preview_source />
                    </div>
                </Show>
            </div>
            <div class="form-actions">
                <button type="submit" class="btn btn--primary" disabled=move || !form.get().can_submit()>
                    {move || if form.get().saving { "Saving..." } else { submit_label }}
                </button>
                <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
