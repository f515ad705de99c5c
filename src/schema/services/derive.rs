//! Derivation of validation and UI-hint documents from property schemas.
//!
//! Both derivations are pure: they read the declared mapping, copy what they
//! need and never write back into it.

use crate::schema::domain::{
    FieldDescriptor, OBJECT_TYPE, PropertySchema, SchemaHeader, SchemaPair, UiHint, UiSchema,
    ValidationSchema,
};
use indexmap::IndexMap;

const ARRAY_TITLE_SUFFIX: &str = " List";

/// Uppercases the first character of `text` and leaves the rest unchanged.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Derives the validation schema for `properties`.
///
/// Each property is copied, named after its key when unnamed, given a
/// `default` mirroring its `value`, and given a synthesized title when it is
/// an untitled array. Polymorphic fields lose their `type` keyword.
#[must_use]
pub fn derive_validation_schema(
    properties: &PropertySchema,
    header: &SchemaHeader,
) -> ValidationSchema {
    let mut required: Vec<String> = Vec::new();
    let mut derived = IndexMap::with_capacity(properties.len());

    for (key, descriptor) in properties.iter() {
        if descriptor.required && !required.iter().any(|name| name == key) {
            required.push(key.to_owned());
        }
        derived.insert(key.to_owned(), normalize_field(key, descriptor));
    }

    ValidationSchema {
        required,
        properties: derived,
        title: header.title().to_owned(),
        schema_type: OBJECT_TYPE.to_owned(),
        description: header.description().map(str::to_owned),
    }
}

/// Derives the UI-hint document for `properties`.
///
/// Only display strings are consulted. Title falls back to the field name and
/// placeholder falls back to the description.
#[must_use]
pub fn derive_ui_schema(properties: &PropertySchema) -> UiSchema {
    properties
        .iter()
        .map(|(key, descriptor)| {
            let hint = UiHint {
                title: non_empty(descriptor.title.as_deref())
                    .unwrap_or(key)
                    .to_owned(),
                description: descriptor.description.clone(),
                placeholder: non_empty(descriptor.placeholder.as_deref())
                    .or(descriptor.description.as_deref())
                    .map(str::to_owned),
                help: descriptor.hint.clone(),
            };
            (key.to_owned(), hint)
        })
        .collect()
}

/// Derives both documents for one class.
#[must_use]
pub fn derive_schema_pair(properties: &PropertySchema, header: &SchemaHeader) -> SchemaPair {
    SchemaPair {
        validation: derive_validation_schema(properties, header),
        ui: derive_ui_schema(properties),
    }
}

fn normalize_field(key: &str, descriptor: &FieldDescriptor) -> FieldDescriptor {
    let mut field = descriptor.clone();
    if field.name.is_none() {
        field.name = Some(key.to_owned());
    }
    if let Some(value) = field.value.as_ref().filter(|value| !value.is_null()) {
        field.default = Some(value.clone());
    }
    synthesize_array_title(&mut field, None);

    let parent_name = field.name.clone();
    for alternatives in [field.any_of.as_mut(), field.one_of.as_mut()]
        .into_iter()
        .flatten()
    {
        for alternative in alternatives.iter_mut() {
            synthesize_array_title(alternative, parent_name.as_deref());
        }
    }

    if field.is_polymorphic() {
        field.field_type = None;
    }
    field
}

// Alternatives prefer their own name over the enclosing field's.
fn synthesize_array_title(field: &mut FieldDescriptor, fallback_name: Option<&str>) {
    if !field.is_array() || non_empty(field.title.as_deref()).is_some() {
        return;
    }
    if let Some(name) = non_empty(field.name.as_deref()).or_else(|| non_empty(fallback_name)) {
        field.title = Some(format!("{}{ARRAY_TITLE_SUFFIX}", capitalize(name)));
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|value| !value.is_empty())
}
