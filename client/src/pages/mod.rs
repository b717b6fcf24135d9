//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page owns a local state signal, issues its fetches once it is mounted
//! in the browser, and renders loading, empty and failure states from that
//! signal. Nothing here runs a request during server rendering.

pub mod page_create;
pub mod page_editor;
pub mod page_list;
pub mod page_view;
pub mod plugins;
pub mod search;
pub mod tag_list;
pub mod tag_pages;
