//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared chrome and the page collection, editor and
//! dialog surfaces. They own no fetches; pages pass state in and receive
//! user intent back through callbacks.

pub mod confirm_dialog;
pub mod editor_form;
pub mod layout;
pub mod markdown_view;
pub mod page_listing;
pub mod pager;
pub mod placeholder;
pub mod tag_card;
pub mod tag_chips;
