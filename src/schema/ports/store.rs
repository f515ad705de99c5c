//! Descriptor store port.

use crate::schema::domain::{DefineMode, PropertySchema};

/// Holds the property descriptors declared for one class.
///
/// Implementations must keep insertion order and must return the flattened
/// mapping, inherited descriptors included.
pub trait DescriptorStore {
    /// Installs `declaration` according to `mode` and returns the resulting
    /// flattened mapping.
    fn define_properties(&mut self, declaration: PropertySchema, mode: DefineMode)
    -> &PropertySchema;

    /// Returns the currently installed mapping.
    fn properties(&self) -> &PropertySchema;
}
