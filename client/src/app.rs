//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::placeholder::Placeholder;
use crate::pages::{
    page_create::PageCreatePage, page_editor::PageEditorPage, page_list::PageListPage, page_view::PageViewPage,
    plugins::PluginsPage, search::SearchPage, tag_list::TagListPage, tag_pages::TagPagesPage,
};
use crate::state::search::HeaderSearch;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Every route renders inside the shared `Layout`. Pages keep their own
/// state; the only shared context is the header search signal.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(HeaderSearch::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/notenest.css"/>
        <Title text="NoteNest"/>

        <Router>
            <Layout>
                <Routes fallback=|| view! { <Placeholder text="Page not found"/> }>
                    <Route path=StaticSegment("") view=PageListPage/>
                    <Route path=(StaticSegment("page"), ParamSegment("slug")) view=PageViewPage/>
                    <Route path=(StaticSegment("edit"), ParamSegment("slug")) view=PageEditorPage/>
                    <Route path=StaticSegment("create") view=PageCreatePage/>
                    <Route path=StaticSegment("tags") view=TagListPage/>
                    <Route path=(StaticSegment("tag"), ParamSegment("name")) view=TagPagesPage/>
                    <Route path=StaticSegment("search") view=SearchPage/>
                    <Route path=StaticSegment("plugins") view=PluginsPage/>
                </Routes>
            </Layout>
        </Router>
    }
}
