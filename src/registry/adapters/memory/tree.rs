//! In-memory class tree.

use std::collections::HashMap;

use crate::registry::{
    domain::{ClassId, RegistryNode},
    ports::ClassTree,
};

/// Arena of registry nodes keyed by class identity.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClassTree {
    nodes: HashMap<ClassId, RegistryNode>,
    roots: Vec<ClassId>,
}

impl InMemoryClassTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClassTree for InMemoryClassTree {
    fn node(&self, id: ClassId) -> Option<&RegistryNode> {
        self.nodes.get(&id)
    }

    fn node_mut(&mut self, id: ClassId) -> Option<&mut RegistryNode> {
        self.nodes.get_mut(&id)
    }

    fn insert(&mut self, node: RegistryNode) {
        let id = node.id();
        match node.parent() {
            Some(parent_id) => {
                if let Some(parent) = self.nodes.get_mut(&parent_id) {
                    parent.attach_child(node.name().clone(), id);
                }
            }
            None => self.roots.push(id),
        }
        self.nodes.insert(id, node);
    }

    fn remove_subtree(&mut self, id: ClassId) -> Vec<ClassId> {
        let Some(node) = self.nodes.get(&id) else {
            return Vec::new();
        };
        match node.parent() {
            Some(parent_id) => {
                if let Some(parent) = self.nodes.get_mut(&parent_id) {
                    parent.detach_child(id);
                }
            }
            None => self.roots.retain(|root| *root != id),
        }

        let mut removed = Vec::new();
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            if let Some(node) = self.nodes.remove(&current) {
                pending.extend(node.children().values().copied());
                removed.push(current);
            }
        }
        removed
    }

    fn roots(&self) -> Vec<ClassId> {
        self.roots.clone()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &RegistryNode> + '_> {
        Box::new(self.nodes.values())
    }
}
