//! Inline tag links shown on page rows and the page view.

use leptos::prelude::*;

use crate::routes;

/// One link per tag, each opening that tag's page collection.
#[component]
pub fn TagChips(tags: Vec<String>) -> impl IntoView {
    view! {
        <span class="tag-chips">
            {tags
                .into_iter()
                .map(|tag| {
                    let href = routes::tag_path(&tag);
                    view! {
                        <a class="tag-chip" href=href>
                            {format!("#{tag}")}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </span>
    }
}
