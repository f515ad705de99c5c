//! Tree storage port for registered classes.

use crate::registry::domain::{ClassId, RegistryNode};

/// Storage of parent/child class relationships.
///
/// Implementations only store and unlink nodes. Name formatting, collision
/// checks and the directory/item policy belong to the registry service.
pub trait ClassTree {
    /// Returns the node registered for `id`.
    fn node(&self, id: ClassId) -> Option<&RegistryNode>;

    /// Returns the node registered for `id` mutably.
    fn node_mut(&mut self, id: ClassId) -> Option<&mut RegistryNode>;

    /// Stores `node` and links it into its parent's children, or into the
    /// root list when it has no parent.
    ///
    /// Callers guarantee that the parent exists and that no node with the
    /// same identity is stored.
    fn insert(&mut self, node: RegistryNode);

    /// Unlinks `id` from its parent and drops it together with every
    /// descendant. Returns the identities removed, `id` first; empty when
    /// `id` is not stored.
    fn remove_subtree(&mut self, id: ClassId) -> Vec<ClassId>;

    /// Returns the root nodes in registration order.
    fn roots(&self) -> Vec<ClassId>;

    /// Iterates over every stored node in unspecified order.
    fn nodes(&self) -> Box<dyn Iterator<Item = &RegistryNode> + '_>;
}
