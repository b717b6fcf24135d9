//! Plugin inventory and metadata-schema inspector state.

#[cfg(test)]
#[path = "plugins_test.rs"]
mod plugins_test;

use serde_json::Value;

use super::loadable::Loadable;
use crate::net::types::Plugin;

/// One field of a metadata plugin schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaField {
    pub name: String,
    /// Declared type (`str`, `int`, `list`, ...), or `unknown`.
    pub field_type: String,
    pub required: bool,
    pub description: String,
    /// Default value rendered as JSON, when the schema declares one.
    pub default: Option<String>,
}

/// Flatten a `{field: {type, required, default, description}}` schema into
/// name-sorted rows. Non-object entries still produce a row.
pub fn schema_fields(schema: &Value) -> Vec<SchemaField> {
    let Some(map) = schema.as_object() else {
        return Vec::new();
    };
    let mut fields: Vec<SchemaField> = map
        .iter()
        .map(|(name, field)| SchemaField {
            name: name.clone(),
            field_type: field.get("type").and_then(Value::as_str).unwrap_or("unknown").to_owned(),
            required: field.get("required").and_then(Value::as_bool).unwrap_or(false),
            description: field.get("description").and_then(Value::as_str).unwrap_or_default().to_owned(),
            default: field.get("default").filter(|v| !v.is_null()).map(Value::to_string),
        })
        .collect();
    fields.sort_by(|a, b| a.name.cmp(&b.name));
    fields
}

#[derive(Clone, Debug, PartialEq)]
pub struct PluginsState {
    pub plugins: Vec<Plugin>,
    pub loading: bool,
    /// Metadata type whose schema panel is open.
    pub open: Option<String>,
    pub schema: Loadable<Vec<SchemaField>>,
}

impl Default for PluginsState {
    fn default() -> Self {
        Self { plugins: Vec::new(), loading: true, open: None, schema: Loadable::Loading }
    }
}

impl PluginsState {
    pub fn apply<E>(&mut self, result: Result<Vec<Plugin>, E>) {
        self.plugins = result.unwrap_or_default();
        self.loading = false;
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.plugins.is_empty()
    }

    /// Open the schema for `metadata_type`, or close it if already open.
    /// Returns `true` when a schema fetch should be issued.
    pub fn toggle_schema(&mut self, metadata_type: &str) -> bool {
        if self.open.as_deref() == Some(metadata_type) {
            self.open = None;
            return false;
        }
        self.open = Some(metadata_type.to_owned());
        self.schema = Loadable::Loading;
        true
    }

    /// Apply a schema fetch. Responses for a panel that is no longer open are
    /// dropped.
    pub fn apply_schema<E>(&mut self, metadata_type: &str, result: Result<Value, E>) {
        if self.open.as_deref() != Some(metadata_type) {
            return;
        }
        self.schema = Loadable::from_result(result.map(|schema| schema_fields(&schema)));
    }
}
