//! Route-scoped view state.
//!
//! DESIGN
//! ======
//! Each page owns one of these structs inside a local `RwSignal` for as long
//! as it is mounted. Nothing here is shared across routes or does I/O, so
//! every transition is testable without a browser.

pub mod editor;
pub mod listing;
pub mod loadable;
pub mod page_view;
pub mod plugins;
pub mod search;
pub mod tags;

#[cfg(test)]
pub(crate) mod test_helpers;
