//! Single-page view state: the fetched page, its backlinks, and the delete
//! confirmation flow.

#[cfg(test)]
#[path = "page_view_test.rs"]
mod page_view_test;

use super::listing::PageListing;
use super::loadable::Loadable;
use crate::net::types::{Page, PageList};

/// Delete confirmation flow: `Idle -> Confirming -> Deleting`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeleteStep {
    #[default]
    Idle,
    /// Confirmation dialog is open; no request has been sent.
    Confirming,
    /// The user confirmed and the delete request is in flight.
    Deleting,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageViewState {
    pub page: Loadable<Page>,
    pub backlinks: PageListing,
    pub delete: DeleteStep,
}

impl PageViewState {
    /// Apply the mount fetch; any error renders as not found.
    pub fn apply_fetch<E>(&mut self, result: Result<Page, E>) {
        self.page = Loadable::from_result(result);
        if self.page.is_missing() {
            self.backlinks.fail();
        }
    }

    pub fn apply_backlinks<E>(&mut self, result: Result<PageList, E>) {
        self.backlinks.apply_result(result);
    }

    /// Open the confirmation dialog. Only a loaded, idle page can be deleted.
    pub fn request_delete(&mut self) {
        if self.page.loaded().is_some() && self.delete == DeleteStep::Idle {
            self.delete = DeleteStep::Confirming;
        }
    }

    pub fn cancel_delete(&mut self) {
        if self.delete == DeleteStep::Confirming {
            self.delete = DeleteStep::Idle;
        }
    }

    /// Confirm the pending delete. Returns the slug to delete, or `None`
    /// when no confirmation was open, in which case no request may be sent.
    pub fn confirm_delete(&mut self) -> Option<String> {
        if self.delete != DeleteStep::Confirming {
            return None;
        }
        let slug = self.page.loaded()?.slug.clone();
        self.delete = DeleteStep::Deleting;
        Some(slug)
    }

    pub fn delete_failed(&mut self) {
        if self.delete == DeleteStep::Deleting {
            self.delete = DeleteStep::Idle;
        }
    }
}
