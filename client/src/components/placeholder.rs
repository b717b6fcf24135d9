use leptos::prelude::*;

/// Muted single-line status text for loading, empty and not-found states.
#[component]
pub fn Placeholder(text: &'static str) -> impl IntoView {
    view! { <p class="placeholder">{text}</p> }
}
