//! Primitive field types and type unions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primitive type a declared property may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 text.
    String,
    /// `true` or `false`.
    Boolean,
    /// Any JSON number.
    Number,
    /// Ordered sequence, element shape given by `items`.
    Array,
    /// Nested key/value object.
    Object,
}

impl FieldType {
    /// Returns the JSON Schema keyword for this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `type` keyword of a descriptor: one type or a union of types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
    /// A single primitive type, e.g. `"string"`.
    Single(FieldType),
    /// A union such as `["string", "array"]`.
    Union(Vec<FieldType>),
}

impl TypeSpec {
    /// Returns `true` when the declared type is exactly `ty`, not a union containing it.
    #[must_use]
    pub fn is_exactly(&self, ty: FieldType) -> bool {
        matches!(self, Self::Single(single) if *single == ty)
    }

    /// Returns `true` when `ty` is the single type or a member of the union.
    #[must_use]
    pub fn includes(&self, ty: FieldType) -> bool {
        match self {
            Self::Single(single) => *single == ty,
            Self::Union(members) => members.contains(&ty),
        }
    }
}

impl From<FieldType> for TypeSpec {
    fn from(value: FieldType) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<FieldType>> for TypeSpec {
    fn from(value: Vec<FieldType>) -> Self {
        Self::Union(value)
    }
}
