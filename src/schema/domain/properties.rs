//! Ordered property-descriptor mapping declared by a backend class.

use super::{DescriptorIssue, FieldDescriptor, FieldType, SchemaDeclarationError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How a new declaration combines with descriptors already in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DefineMode {
    /// Keep inherited descriptors, replace matching keys in place and append
    /// new keys.
    #[default]
    Merge,
    /// Discard inherited descriptors and install only the new declaration.
    Recreate,
}

/// Insertion-ordered mapping from field name to [`FieldDescriptor`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertySchema(IndexMap<String, FieldDescriptor>);

impl PropertySchema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a schema from a JSON object of descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when `value` is not an object of valid
    /// descriptors.
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Adds or replaces a field, returning the schema for chaining.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, descriptor: FieldDescriptor) -> Self {
        self.insert(name, descriptor);
        self
    }

    /// Adds or replaces a field. A replaced field keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, descriptor: FieldDescriptor) {
        self.0.insert(name.into(), descriptor);
    }

    /// Returns the descriptor declared for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.0.get(name)
    }

    /// Returns `true` when `name` is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Iterates over fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDescriptor)> {
        self.0.iter().map(|(name, descriptor)| (name.as_str(), descriptor))
    }

    /// Iterates over field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no field is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Combines `declaration` with this schema according to `mode`.
    #[must_use]
    pub fn define(&self, declaration: Self, mode: DefineMode) -> Self {
        match mode {
            DefineMode::Recreate => declaration,
            DefineMode::Merge => {
                let mut merged = self.clone();
                merged.0.extend(declaration.0);
                merged
            }
        }
    }

    /// Lists descriptors whose shape the deriver will normalize.
    #[must_use]
    pub fn issues(&self) -> Vec<DescriptorIssue> {
        let mut issues = Vec::new();
        for (name, descriptor) in &self.0 {
            if descriptor.field_type.is_some() && descriptor.is_polymorphic() {
                issues.push(DescriptorIssue::TypeWithAlternatives(name.clone()));
            }
            let accepts_arrays = descriptor
                .field_type
                .as_ref()
                .is_some_and(|ty| ty.includes(FieldType::Array));
            if descriptor.items.is_some() && !accepts_arrays && !descriptor.is_polymorphic() {
                issues.push(DescriptorIssue::ItemsWithoutArray(name.clone()));
            }
        }
        issues
    }

    /// Rejects the schema if any descriptor would be normalized.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaDeclarationError`] listing every issue found.
    pub fn validate(&self) -> Result<(), SchemaDeclarationError> {
        let issues = self.issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(SchemaDeclarationError { issues })
        }
    }

    /// Fills absent or null entries of `values` with declared defaults.
    pub fn apply_defaults(&self, values: &mut Map<String, Value>) {
        for (name, descriptor) in &self.0 {
            let Some(default) = descriptor.value.as_ref().filter(|v| !v.is_null()) else {
                continue;
            };
            let missing = values.get(name).is_none_or(Value::is_null);
            if missing {
                values.insert(name.clone(), default.clone());
            }
        }
    }
}

impl FromIterator<(String, FieldDescriptor)> for PropertySchema {
    fn from_iter<I: IntoIterator<Item = (String, FieldDescriptor)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PropertySchema {
    type Item = (&'a String, &'a FieldDescriptor);
    type IntoIter = indexmap::map::Iter<'a, String, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
