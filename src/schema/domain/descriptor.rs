//! Declarative descriptor for one backend property.

use super::{FieldType, TypeSpec};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One declared property of a backend class.
///
/// A descriptor is either simple-typed (`field_type`) or polymorphic over a
/// closed set of alternative shapes (`any_of` / `one_of`). Declaring both is
/// tolerated for compatibility: the schema deriver drops `type` in that case,
/// and [`PropertySchema::issues`](super::PropertySchema::issues) reports it at
/// declaration time.
///
/// Keys the deriver does not interpret (`enum`, `minimum`, ...) are kept in
/// [`extra`](Self::extra) and copied through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Accepted primitive type or union of types.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<TypeSpec>,
    /// Whether the property must be supplied.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Element shape, meaningful only when `field_type` includes `array`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<FieldDescriptor>>,
    /// Declaration-time default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Schema-facing projection of `value`, filled in by the deriver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Property name; the deriver falls back to the mapping key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Input placeholder text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Help text shown below the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Alternatives of which at least one must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<FieldDescriptor>>,
    /// Alternatives of which exactly one must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<FieldDescriptor>>,
    /// Uninterpreted schema keywords.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldDescriptor {
    /// Creates a simple-typed descriptor.
    #[must_use]
    pub fn typed(field_type: impl Into<TypeSpec>) -> Self {
        Self {
            field_type: Some(field_type.into()),
            ..Self::default()
        }
    }

    /// Creates a polymorphic descriptor matching any of `alternatives`.
    #[must_use]
    pub fn any_of(alternatives: impl IntoIterator<Item = Self>) -> Self {
        Self {
            any_of: Some(alternatives.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Creates a polymorphic descriptor matching exactly one of `alternatives`.
    #[must_use]
    pub fn one_of(alternatives: impl IntoIterator<Item = Self>) -> Self {
        Self {
            one_of: Some(alternatives.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Marks the property as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the element shape for array-typed properties.
    #[must_use]
    pub fn with_items(mut self, items: Self) -> Self {
        self.items = Some(Box::new(items));
        self
    }

    /// Sets the declaration-time default value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets an explicit property name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Adds an uninterpreted schema keyword.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Returns `true` when the descriptor declares `anyOf` or `oneOf`.
    #[must_use]
    pub const fn is_polymorphic(&self) -> bool {
        self.any_of.is_some() || self.one_of.is_some()
    }

    /// Returns `true` when `type` is exactly `array`.
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.field_type
            .as_ref()
            .is_some_and(|ty| ty.is_exactly(FieldType::Array))
    }
}
