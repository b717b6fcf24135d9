//! Search form and result state.
//!
//! DESIGN
//! ======
//! The form keeps raw input strings; `to_query` is the only place that turns
//! them into a `SearchQuery`, dropping blanks so the server sees only the
//! filters the user actually set. The backend only filters by date when both
//! ends are present, so a one-sided range is never sent.
//!
//! A keyword can arrive two ways: the `?q=` URL parameter, or an explicit
//! header search submit (`HeaderSearch`). Either one only replaces the
//! keyword; tag, type and date filters already in the form are kept.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use super::listing::PageListing;
use crate::net::types::{PageList, Plugin, SearchQuery};

/// Raw search form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub q: String,
    /// Comma-separated tag names.
    pub tags: String,
    pub metadata_type: String,
    /// `YYYY-MM-DD` from a date input.
    pub start_date: String,
    /// `YYYY-MM-DD` from a date input.
    pub end_date: String,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

impl SearchForm {
    /// Tag input split on commas, trimmed, blanks dropped.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Exactly one of From / To is filled in.
    pub fn has_partial_date_range(&self) -> bool {
        non_blank(&self.start_date).is_some() != non_blank(&self.end_date).is_some()
    }

    /// Inclusive `[start, end]` timestamps, only when both dates are set.
    pub fn date_range(&self) -> Option<(String, String)> {
        let start = non_blank(&self.start_date)?;
        let end = non_blank(&self.end_date)?;
        Some((format!("{start}T00:00:00"), format!("{end}T23:59:59")))
    }

    pub fn to_query(&self, limit: u32, offset: u32) -> SearchQuery {
        let tags = self.tag_list();
        let (start_date, end_date) = self.date_range().unzip();
        SearchQuery {
            q: non_blank(&self.q),
            tags: (!tags.is_empty()).then_some(tags),
            metadata_type: non_blank(&self.metadata_type),
            start_date,
            end_date,
            limit: Some(limit),
            offset: Some(offset),
        }
    }
}

/// Header search submissions. `seq` increases on every submit so that
/// re-submitting the same keyword is still observable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderSearch {
    pub keyword: String,
    pub seq: u64,
}

impl HeaderSearch {
    pub fn submit(&mut self, keyword: &str) {
        self.keyword = keyword.trim().to_owned();
        self.seq += 1;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchState {
    pub form: SearchForm,
    pub results: PageListing,
    /// At least one search has been sent; before that no results render.
    pub submitted: bool,
    /// Metadata types offered by installed plugins, for the type filter.
    pub metadata_types: Vec<String>,
    /// Last keyword taken from the URL or the header.
    last_keyword: String,
    /// Last header submit already acted on.
    last_header_seq: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            form: SearchForm::default(),
            results: PageListing { loading: false, ..PageListing::default() },
            submitted: false,
            metadata_types: Vec::new(),
            last_keyword: String::new(),
            last_header_seq: 0,
        }
    }
}

impl SearchState {
    /// Fresh state that ignores header submits made before this mount.
    pub fn for_header(header: &HeaderSearch) -> Self {
        Self { last_header_seq: header.seq, ..Self::default() }
    }

    /// Reconcile the URL keyword and the header search with the form.
    /// A new header submit wins, even with an unchanged keyword; otherwise a
    /// changed URL keyword applies. Returns `true` when a search should run.
    pub fn sync_keyword(&mut self, url_q: &str, header: &HeaderSearch) -> bool {
        let keyword = if header.seq != self.last_header_seq {
            self.last_header_seq = header.seq;
            header.keyword.trim().to_owned()
        } else if url_q.trim() != self.last_keyword {
            url_q.trim().to_owned()
        } else {
            return false;
        };
        self.last_keyword.clone_from(&keyword);
        if keyword.is_empty() {
            return false;
        }
        self.form.q = keyword;
        true
    }

    /// Start a search for the window at `offset` and return the request body.
    pub fn begin(&mut self, offset: u32) -> SearchQuery {
        self.submitted = true;
        self.results.begin(offset);
        self.form.to_query(self.results.limit, offset)
    }

    pub fn apply<E>(&mut self, result: Result<PageList, E>) {
        self.results.apply_result(result);
    }

    pub fn set_plugins(&mut self, plugins: &[Plugin]) {
        let mut types: Vec<String> = plugins.iter().filter_map(|p| p.metadata_type.clone()).collect();
        types.sort();
        types.dedup();
        self.metadata_types = types;
    }
}
