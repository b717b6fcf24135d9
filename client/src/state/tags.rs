//! Tag inventory state for the tag list route.

#[cfg(test)]
#[path = "tags_test.rs"]
mod tags_test;

use crate::net::types::Tag;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagListState {
    pub tags: Vec<Tag>,
    pub loading: bool,
}

impl Default for TagListState {
    fn default() -> Self {
        Self { tags: Vec::new(), loading: true }
    }
}

impl TagListState {
    /// Apply the one-shot fetch. A failure ends loading with no tags.
    pub fn apply<E>(&mut self, result: Result<Vec<Tag>, E>) {
        self.tags = result.unwrap_or_default();
        self.loading = false;
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.tags.is_empty()
    }
}

/// Card caption for a tag's page count.
pub fn count_label(count: u64) -> String {
    format!("{count} pages")
}
