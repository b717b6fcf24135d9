//! Rendered Markdown block.

use leptos::prelude::*;

use crate::util::markdown::render_markdown_html;

/// Render `source` as sanitized Markdown HTML. Re-renders when it changes.
#[component]
pub fn MarkdownView(source: Signal<String>) -> impl IntoView {
    view! { <div class="markdown-body" inner_html=move || render_markdown_html(&source.get())></div> }
}
