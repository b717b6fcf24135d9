//! Card for one entry on the tags route.

use leptos::prelude::*;

use crate::net::types::Tag;
use crate::routes;
use crate::state::tags::count_label;

/// A clickable card showing a tag name and how many pages carry it.
#[component]
pub fn TagCard(tag: Tag) -> impl IntoView {
    let href = routes::tag_path(&tag.name);
    view! {
        <a class="tag-card" href=href>
            <span class="tag-card__name">{tag.name}</span>
            <span class="tag-card__count">{count_label(tag.count)}</span>
        </a>
    }
}
