//! Properties shared by every backend class.

use crate::schema::domain::{FieldDescriptor, FieldType, PropertySchema};

/// Returns the property declaration every backend inherits: `name`,
/// `enabled`, `icon`, `displayName`, `alias` and `description`.
#[must_use]
pub fn base_backend_properties() -> PropertySchema {
    PropertySchema::new()
        .with(
            "name",
            FieldDescriptor::typed(FieldType::String)
                .required()
                .with_description("the unique name of the backend"),
        )
        .with(
            "enabled",
            FieldDescriptor::typed(FieldType::Boolean)
                .with_value(true)
                .with_description("enable the backend or not"),
        )
        .with(
            "icon",
            FieldDescriptor::typed(FieldType::String)
                .with_description("the icon name of the backend"),
        )
        .with(
            "displayName",
            FieldDescriptor::typed(FieldType::String).with_description("the backend display name"),
        )
        .with(
            "alias",
            FieldDescriptor::typed(vec![FieldType::String, FieldType::Array])
                .with_items(FieldDescriptor::typed(FieldType::String))
                .with_description("additional unique names of the backend"),
        )
        .with(
            "description",
            FieldDescriptor::typed(FieldType::String)
                .with_description("the optional description of the backend"),
        )
}
