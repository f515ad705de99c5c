//! Derived schema documents.

use super::FieldDescriptor;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The `type` keyword of every derived validation schema.
pub const OBJECT_TYPE: &str = "object";

/// Class-level metadata placed at the top of a validation schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaHeader {
    title: String,
    description: Option<String>,
}

impl SchemaHeader {
    /// Creates a header with the given title and no description.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Sets the description. Empty descriptions are treated as absent.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let text = description.into();
        self.description = (!text.is_empty()).then_some(text);
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if declared.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// JSON-Schema-shaped document describing a backend's properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationSchema {
    /// Names of required fields, in declaration order.
    pub required: Vec<String>,
    /// Normalized copies of each declared descriptor.
    pub properties: IndexMap<String, FieldDescriptor>,
    /// Class title, or its canonical name.
    pub title: String,
    /// Always [`OBJECT_TYPE`].
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Class description, omitted when not declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Display hints for one field.
///
/// Absent hints serialize as `null` so every entry carries the same four keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiHint {
    /// Field label.
    #[serde(rename = "ui:title")]
    pub title: String,
    /// Field description.
    #[serde(rename = "ui:description")]
    pub description: Option<String>,
    /// Input placeholder.
    #[serde(rename = "ui:placeholder")]
    pub placeholder: Option<String>,
    /// Help text.
    #[serde(rename = "ui:help")]
    pub help: Option<String>,
}

/// Mapping from field name to its [`UiHint`], in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UiSchema(IndexMap<String, UiHint>);

impl UiSchema {
    /// Returns the hint for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&UiHint> {
        self.0.get(field)
    }

    /// Iterates over hints in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UiHint)> {
        self.0.iter().map(|(name, hint)| (name.as_str(), hint))
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, UiHint)> for UiSchema {
    fn from_iter<I: IntoIterator<Item = (String, UiHint)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Validation schema and UI-hint document derived from the same class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaPair {
    /// Data-validation schema.
    pub validation: ValidationSchema,
    /// UI-rendering hints.
    pub ui: UiSchema,
}
