//! Domain model for declarative backend property schemas.
//!
//! A backend class declares an ordered mapping of [`FieldDescriptor`]s. The
//! schema services turn that mapping into a [`ValidationSchema`] and a
//! [`UiSchema`].

mod descriptor;
mod documents;
mod error;
mod field_type;
mod properties;

pub use descriptor::FieldDescriptor;
pub use documents::{OBJECT_TYPE, SchemaHeader, SchemaPair, UiHint, UiSchema, ValidationSchema};
pub use error::{DescriptorIssue, SchemaDeclarationError};
pub use field_type::{FieldType, TypeSpec};
pub use properties::{DefineMode, PropertySchema};
