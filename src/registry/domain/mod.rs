//! Domain model for the hierarchical backend registry.
//!
//! Classes are declared with [`BackendClass`], attached to the tree as
//! [`RegistryNode`]s and looked up by [`BackendName`] or [`TypeRef`].

mod class;
mod config;
mod error;
mod ids;
mod kind;
mod name;
mod node;
mod type_ref;

pub use class::{BackendClass, BackendClassBuilder};
pub use config::{AliasScope, RegistryConfig};
pub use error::BackendDomainError;
pub use ids::ClassId;
pub use kind::NodeKind;
pub use name::{BackendName, PATH_SEPARATOR, format_class_name};
pub use node::RegistryNode;
pub use type_ref::TypeRef;
