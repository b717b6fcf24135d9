//! Wire DTOs for the NoteNest REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON shapes. Request bodies omit absent
//! optional fields instead of sending `null` so partial updates stay partial.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A markdown page as returned by `/pages` endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Server-assigned numeric identifier.
    pub id: i64,
    /// URL-safe unique key.
    pub slug: String,
    pub title: String,
    /// Raw markdown body.
    pub content: String,
    /// Free-form metadata map (frontmatter, plugin fields).
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 last-update timestamp.
    pub updated_at: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Body for `POST /pages`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageCreate {
    pub title: String,
    pub content: String,
    /// Explicit slug; the server derives one from the title when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

/// Body for `PUT /pages/{slug}`. Only present fields are changed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

/// Paged page collection (`{pages, total}`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageList {
    pub pages: Vec<Page>,
    /// Total matches on the server, independent of the returned window.
    pub total: u64,
}

/// A tag with its server-computed page count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub count: u64,
}

/// A server-side extension.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugin {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
    /// Page metadata type this plugin defines a schema for, if any.
    #[serde(default)]
    pub metadata_type: Option<String>,
}

/// Body for `POST /search`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_type: Option<String>,
    /// Inclusive lower bound on update time (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Inclusive upper bound on update time (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}
