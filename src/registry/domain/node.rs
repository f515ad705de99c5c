//! Registry tree node.

use super::{BackendClass, BackendName, ClassId, NodeKind};
use indexmap::IndexMap;

/// A registered class and its position in the tree.
///
/// The tree owns nodes top-down through `children`; `parent` is a
/// back-reference set once at registration.
#[derive(Debug, Clone)]
pub struct RegistryNode {
    class: BackendClass,
    name: BackendName,
    aliases: Vec<BackendName>,
    kind: NodeKind,
    enabled: bool,
    parent: Option<ClassId>,
    children: IndexMap<BackendName, ClassId>,
}

impl RegistryNode {
    pub(crate) fn new(
        class: BackendClass,
        name: BackendName,
        aliases: Vec<BackendName>,
        kind: NodeKind,
        parent: Option<ClassId>,
    ) -> Self {
        let enabled = class.enabled();
        Self {
            class,
            name,
            aliases,
            kind,
            enabled,
            parent,
            children: IndexMap::new(),
        }
    }

    /// Returns the class identity.
    #[must_use]
    pub const fn id(&self) -> ClassId {
        self.class.id()
    }

    /// Returns the registered class.
    #[must_use]
    pub const fn class(&self) -> &BackendClass {
        &self.class
    }

    /// Returns the canonical name.
    #[must_use]
    pub const fn name(&self) -> &BackendName {
        &self.name
    }

    /// Returns the aliases.
    #[must_use]
    pub fn aliases(&self) -> &[BackendName] {
        &self.aliases
    }

    /// Returns `true` when `key` is the canonical name or an alias.
    #[must_use]
    pub fn answers_to(&self, key: &str) -> bool {
        self.name.as_str() == key || self.has_alias(key)
    }

    /// Returns `true` when `key` is one of the aliases.
    #[must_use]
    pub fn has_alias(&self, key: &str) -> bool {
        self.aliases.iter().any(|alias| alias.as_str() == key)
    }

    /// Returns the directory/item kind.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns `true` for directory nodes.
    #[must_use]
    pub const fn is_directory(&self) -> bool {
        self.kind.is_directory()
    }

    /// Returns the availability flag.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the parent directory, or `None` for a root.
    #[must_use]
    pub const fn parent(&self) -> Option<ClassId> {
        self.parent
    }

    /// Returns the children in registration order.
    ///
    /// Children stay attached when a directory is re-registered as an item
    /// but are no longer reachable through lookups.
    #[must_use]
    pub const fn children(&self) -> &IndexMap<BackendName, ClassId> {
        &self.children
    }

    pub(crate) const fn set_kind(&mut self, kind: NodeKind) {
        self.kind = kind;
    }

    pub(crate) const fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn attach_child(&mut self, name: BackendName, child: ClassId) {
        self.children.insert(name, child);
    }

    pub(crate) fn detach_child(&mut self, child: ClassId) -> bool {
        let before = self.children.len();
        self.children.retain(|_, id| *id != child);
        self.children.len() != before
    }
}
