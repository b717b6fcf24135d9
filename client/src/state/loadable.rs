//! Fetch outcome for a single entity loaded on mount.

#[cfg(test)]
#[path = "loadable_test.rs"]
mod loadable_test;

/// Lifecycle of an entity a page fetches once on mount.
///
/// Any fetch failure (404 or transport) lands in `Missing`; pages render that
/// as the not-found placeholder.
#[derive(Clone, Debug, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Loaded(T),
    Missing,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> Loadable<T> {
    /// Build from a fetch result, collapsing every error into `Missing`.
    pub fn from_result<E>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(_) => Self::Missing,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Loading | Self::Missing => None,
        }
    }
}
