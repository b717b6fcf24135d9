//! Create/edit form state and the edit/preview/split view-mode toggle.
//!
//! DESIGN
//! ======
//! `ViewMode` only answers which regions render. Switching it never touches
//! the form fields, so a half-written page survives any number of toggles.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use super::loadable::Loadable;
use crate::net::types::{Page, PageCreate, PageUpdate};
use crate::routes;

/// Which editor regions are visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Markdown textarea only.
    #[default]
    Edit,
    /// Rendered markdown only.
    Preview,
    /// Textarea and rendered markdown side by side.
    Split,
}

impl ViewMode {
    pub const ALL: [Self; 3] = [Self::Edit, Self::Preview, Self::Split];

    pub fn label(self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Preview => "Preview",
            Self::Split => "Split View",
        }
    }

    pub fn shows_editor(self) -> bool {
        matches!(self, Self::Edit | Self::Split)
    }

    pub fn shows_preview(self) -> bool {
        matches!(self, Self::Preview | Self::Split)
    }
}

/// A single user edit to the form, dispatched from the editor component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEdit {
    Title(String),
    Content(String),
    Slug(String),
    ViewMode(ViewMode),
}

/// Field state for the create and edit forms.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorState {
    pub title: String,
    pub content: String,
    /// Optional explicit slug; only the create form exposes it.
    pub slug: String,
    pub view_mode: ViewMode,
    /// A submit request is in flight.
    pub saving: bool,
}

impl EditorState {
    /// Seed the form from a fetched page.
    pub fn from_page(page: &Page) -> Self {
        Self {
            title: page.title.clone(),
            content: page.content.clone(),
            slug: page.slug.clone(),
            ..Self::default()
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn apply(&mut self, edit: FormEdit) {
        match edit {
            FormEdit::Title(title) => self.title = title,
            FormEdit::Content(content) => self.content = content,
            FormEdit::Slug(slug) => self.slug = slug,
            FormEdit::ViewMode(mode) => self.set_view_mode(mode),
        }
    }

    /// Title and content are both required.
    pub fn can_submit(&self) -> bool {
        !self.saving && !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    /// Flip into the saving state. Returns `false` when the form may not be
    /// submitted, in which case nothing changes and no request should go out.
    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.saving = true;
        true
    }

    pub fn submit_failed(&mut self) {
        self.saving = false;
    }

    pub fn create_request(&self) -> PageCreate {
        let slug = self.slug.trim();
        PageCreate {
            title: self.title.clone(),
            content: self.content.clone(),
            slug: (!slug.is_empty()).then(|| slug.to_owned()),
            metadata: None,
        }
    }

    pub fn update_request(&self) -> PageUpdate {
        PageUpdate { title: Some(self.title.clone()), content: Some(self.content.clone()), metadata: None }
    }

    /// `begin_submit` then build the create body; `None` means send nothing.
    pub fn submit_create(&mut self) -> Option<PageCreate> {
        self.begin_submit().then(|| self.create_request())
    }

    /// Where to go after a successful create: the page at the slug the server
    /// assigned, which may differ from anything derived from the title.
    pub fn created_target(created: &Page) -> String {
        routes::page_path(&created.slug)
    }

    /// `begin_submit` then build the update body; `None` means send nothing.
    pub fn submit_update(&mut self) -> Option<PageUpdate> {
        self.begin_submit().then(|| self.update_request())
    }
}

/// Edit route state: the fetched page plus the form seeded from it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditPageState {
    pub source: Loadable<Page>,
    pub form: EditorState,
}

impl EditPageState {
    /// Apply the mount fetch. Success seeds the form; any error is not-found.
    pub fn apply_fetch<E>(&mut self, result: Result<Page, E>) {
        if let Ok(page) = &result {
            self.form = EditorState::from_page(page);
        }
        self.source = Loadable::from_result(result);
    }
}
