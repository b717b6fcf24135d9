//! Deferred navigation for async completions.
//!
//! DESIGN
//! ======
//! Callbacks and spawned fetches only write a signal; a single effect owned
//! by the page performs the actual navigation. This keeps the router handle
//! out of `Send + Sync` callback closures.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Returns a signal that navigates to whatever path is written into it.
/// Must be called inside a `Router`.
pub fn use_redirect() -> RwSignal<Option<String>> {
    let navigate = use_navigate();
    let target = RwSignal::new(None::<String>);
    Effect::new(move || {
        let Some(path) = target.get() else {
            return;
        };
        target.set(None);
        navigate(&path, NavigateOptions::default());
    });
    target
}
