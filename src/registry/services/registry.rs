//! Service layer for the hierarchical backend registry.
//!
//! Provides [`BackendRegistry`], which layers naming, aliasing and the
//! directory/item distinction on top of a [`ClassTree`].

use crate::registry::{
    adapters::memory::InMemoryClassTree,
    domain::{
        AliasScope, BackendClass, BackendDomainError, BackendName, ClassId, NodeKind,
        PATH_SEPARATOR, RegistryConfig, RegistryNode, TypeRef, format_class_name,
    },
    ports::ClassTree,
};
use crate::schema::{
    domain::{SchemaHeader, SchemaPair},
    ports::DescriptorStore,
    services::{base_backend_properties, derive_schema_pair},
};
use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Type identifier of the default root class.
pub const ROOT_TYPE_NAME: &str = "Backend";

/// Naming overrides supplied at registration time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterOptions {
    name: Option<String>,
    aliases: Option<Vec<String>>,
}

impl RegisterOptions {
    /// Creates options that keep the class's declared naming.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers under `name` instead of the declared or formatted name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the class's declared aliases.
    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = Some(aliases.into_iter().map(Into::into).collect());
        self
    }
}

/// Errors that reject a registration. The tree is left unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// A name or alias failed validation.
    #[error(transparent)]
    Domain(#[from] BackendDomainError),

    /// The parent class is not registered.
    #[error("parent class not registered: {0}")]
    UnknownParent(ClassId),

    /// The parent is an item and cannot hold children.
    #[error("parent '{0}' is not a directory")]
    ParentNotDirectory(BackendName),

    /// A sibling already answers to the canonical name.
    #[error("name '{name}' is already registered under '{scope}'")]
    DuplicateName {
        /// Colliding name.
        name: BackendName,
        /// Directory in which the collision occurred.
        scope: BackendName,
    },

    /// Another class already answers to the alias.
    #[error("alias '{alias}' is already registered by '{owner}'")]
    DuplicateAlias {
        /// Colliding alias.
        alias: BackendName,
        /// Canonical name of the class holding it.
        owner: BackendName,
    },

    /// The class is already registered under a different parent.
    #[error("class '{name}' is already registered under another parent")]
    AlreadyAttached {
        /// Canonical name of the registered class.
        name: BackendName,
    },
}

/// Result type for registration operations.
pub type RegistrationResult<T> = Result<T, RegistrationError>;

/// Callback verdict for [`BackendRegistry::for_each`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visit {
    /// Keep the entry under its canonical name and continue.
    Continue,
    /// Expose the entry under another name and continue. The stored node is
    /// not renamed.
    Rename(String),
    /// Stop iterating; the current entry is not listed.
    Break,
}

/// One entry produced by [`BackendRegistry::for_each`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedClass {
    /// Name the entry is exposed under.
    pub name: String,
    /// Identity of the listed class.
    pub id: ClassId,
}

/// Owned registry of backend classes arranged in directory trees.
///
/// Each tree has one root directory. Every other class is attached below a
/// directory as either a nested directory or a terminal item.
#[derive(Debug, Clone)]
pub struct BackendRegistry<T = InMemoryClassTree>
where
    T: ClassTree,
{
    config: RegistryConfig,
    tree: T,
}

impl BackendRegistry<InMemoryClassTree> {
    /// Creates an empty in-memory registry.
    #[must_use]
    pub fn new(config: RegistryConfig) -> Self {
        Self::with_tree(config, InMemoryClassTree::new())
    }

    /// Creates an in-memory registry rooted at the abstract `Backend` class,
    /// which declares the shared backend properties.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError`] when the root cannot be registered.
    pub fn with_default_root(config: RegistryConfig) -> RegistrationResult<(Self, ClassId)> {
        let root = BackendClass::builder(ROOT_TYPE_NAME)
            .properties(base_backend_properties())
            .build()?;
        let mut registry = Self::new(config);
        let id = registry.register_root(root)?;
        Ok((registry, id))
    }
}

impl<T> BackendRegistry<T>
where
    T: ClassTree,
{
    /// Creates a registry over an existing tree store.
    #[must_use]
    pub const fn with_tree(config: RegistryConfig, tree: T) -> Self {
        Self { config, tree }
    }

    /// Returns the registry configuration.
    #[must_use]
    pub const fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Registers `class` as the root directory of a new tree.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::AlreadyAttached`] when the class is already
    /// registered, or a domain or alias error for invalid naming.
    pub fn register_root(&mut self, class: BackendClass) -> RegistrationResult<ClassId> {
        if let Some(existing) = self.tree.node(class.id()) {
            return Err(RegistrationError::AlreadyAttached {
                name: existing.name().clone(),
            });
        }
        let (name, aliases) = self.naming(&class, RegisterOptions::default())?;
        if self.config.alias_scope == AliasScope::Global {
            self.check_global_aliases(&aliases)?;
        }
        let id = class.id();
        debug!(%name, %id, "registered root directory");
        self.tree
            .insert(RegistryNode::new(class, name, aliases, NodeKind::Directory, None));
        Ok(id)
    }

    /// Attaches `class` under `parent` as a directory that may hold children.
    ///
    /// Re-registering a class already under `parent` only changes its kind.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError`] when the parent is missing or is not a
    /// directory, when the name or an alias collides, or when the class is
    /// already attached elsewhere.
    pub fn register_directory(
        &mut self,
        class: BackendClass,
        parent: ClassId,
        options: RegisterOptions,
    ) -> RegistrationResult<ClassId> {
        self.attach(class, parent, options, NodeKind::Directory)
    }

    /// Attaches `class` under `parent` as a terminal item.
    ///
    /// Re-registering a directory as an item clears its directory flag; its
    /// children stay stored but are no longer reachable through lookups.
    ///
    /// # Errors
    ///
    /// Same as [`register_directory`](Self::register_directory).
    pub fn register_item(
        &mut self,
        class: BackendClass,
        parent: ClassId,
        options: RegisterOptions,
    ) -> RegistrationResult<ClassId> {
        self.attach(class, parent, options, NodeKind::Item)
    }

    /// Looks up a direct child of `scope` by canonical name, then by alias.
    ///
    /// The key is trimmed the way registered names are. Returns `None` when
    /// nothing matches or `scope` is not a directory.
    #[must_use]
    pub fn resolve(&self, scope: ClassId, name_or_alias: &str) -> Option<ClassId> {
        let key = name_or_alias.trim();
        let directory = self.tree.node(scope).filter(|node| node.is_directory())?;
        if let Some(id) = directory.children().get(key) {
            return Some(*id);
        }
        directory
            .children()
            .values()
            .copied()
            .find(|id| self.tree.node(*id).is_some_and(|child| child.has_alias(key)))
    }

    /// Looks up a `/`-separated path of names below `scope`.
    #[must_use]
    pub fn resolve_path(&self, scope: ClassId, path: &str) -> Option<ClassId> {
        let mut segments = path
            .split(PATH_SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .peekable();
        segments.peek()?;
        segments.try_fold(scope, |current, segment| self.resolve(current, segment))
    }

    /// Resolves a requested type relative to `scope`.
    ///
    /// Names are tried as children of `scope` (or as a path when they
    /// contain `/`) and finally against `scope` itself. Class references
    /// resolve when they name `scope` or a descendant reachable from it
    /// through directories.
    #[must_use]
    pub fn resolve_type(&self, scope: ClassId, requested: &TypeRef) -> Option<ClassId> {
        let resolved = match requested {
            TypeRef::Name(name) if name.contains(PATH_SEPARATOR) => {
                self.resolve_path(scope, name)
            }
            TypeRef::Name(name) => self.resolve(scope, name).or_else(|| {
                self.tree
                    .node(scope)
                    .filter(|node| node.answers_to(name.trim()))
                    .map(RegistryNode::id)
            }),
            TypeRef::Class(id) => Some(*id).filter(|id| self.is_within(*id, scope)),
        };
        debug!(%requested, found = resolved.is_some(), "resolved backend type");
        resolved
    }

    /// Walks parent links up to the root of the tree containing `id`.
    #[must_use]
    pub fn find_root(&self, id: ClassId) -> Option<ClassId> {
        let mut current = self.tree.node(id)?;
        while let Some(parent) = current.parent().and_then(|parent| self.tree.node(parent)) {
            current = parent;
        }
        Some(current.id())
    }

    /// Visits the direct children of `scope` in registration order.
    ///
    /// The callback receives each child's canonical name and node and decides
    /// whether to continue, rename the listed entry, or stop.
    pub fn for_each<F>(&self, scope: ClassId, mut visit: F) -> Vec<ListedClass>
    where
        F: FnMut(&str, &RegistryNode) -> Visit,
    {
        let mut listed = Vec::new();
        let Some(directory) = self.tree.node(scope).filter(|node| node.is_directory()) else {
            return listed;
        };
        for (name, id) in directory.children() {
            let Some(child) = self.tree.node(*id) else {
                continue;
            };
            match visit(name.as_str(), child) {
                Visit::Break => break,
                Visit::Continue => listed.push(ListedClass {
                    name: name.as_str().to_owned(),
                    id: *id,
                }),
                Visit::Rename(exposed) => listed.push(ListedClass { name: exposed, id: *id }),
            }
        }
        listed
    }

    /// Returns the registered children of a directory.
    #[must_use]
    pub fn items(&self, scope: ClassId) -> Option<&IndexMap<BackendName, ClassId>> {
        self.tree
            .node(scope)
            .filter(|node| node.is_directory())
            .map(RegistryNode::children)
    }

    /// Removes a class and all of its descendants.
    ///
    /// With `target` unset, `scope` removes itself from its parent. A name
    /// target is looked up among the children of `scope`; a class target must
    /// be `scope` or one of its descendants. Returns `true` only when
    /// something was removed.
    pub fn unregister(&mut self, scope: ClassId, target: Option<&TypeRef>) -> bool {
        let victim = match target {
            None => Some(scope).filter(|id| self.tree.node(*id).is_some()),
            Some(TypeRef::Name(name)) if name.contains(PATH_SEPARATOR) => {
                self.resolve_path(scope, name)
            }
            Some(TypeRef::Name(name)) => self.resolve(scope, name),
            Some(TypeRef::Class(id)) => Some(*id).filter(|id| self.is_within(*id, scope)),
        };
        let Some(victim) = victim else {
            return false;
        };
        let removed = self.tree.remove_subtree(victim);
        debug!(id = %victim, count = removed.len(), "unregistered backend class");
        !removed.is_empty()
    }

    /// Returns the node registered for `id`.
    #[must_use]
    pub fn node(&self, id: ClassId) -> Option<&RegistryNode> {
        self.tree.node(id)
    }

    /// Returns `true` when `id` is registered.
    #[must_use]
    pub fn contains(&self, id: ClassId) -> bool {
        self.tree.node(id).is_some()
    }

    /// Returns the roots in registration order.
    #[must_use]
    pub fn roots(&self) -> Vec<ClassId> {
        self.tree.roots()
    }

    /// Flips a class's availability flag. The class stays resolvable.
    /// Returns `false` when `id` is not registered.
    pub fn set_enabled(&mut self, id: ClassId, enabled: bool) -> bool {
        let Some(node) = self.tree.node_mut(id) else {
            return false;
        };
        node.set_enabled(enabled);
        debug!(name = %node.name(), enabled, "changed backend availability");
        true
    }

    /// Derives the validation and UI-hint documents for a registered class.
    ///
    /// The validation schema is titled with the class title, or its canonical
    /// name when no title is declared.
    #[must_use]
    pub fn schema_pair(&self, id: ClassId) -> Option<SchemaPair> {
        let node = self.tree.node(id)?;
        let class = node.class();
        let title = class
            .title()
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| node.name().as_str());
        let mut header = SchemaHeader::new(title);
        if let Some(description) = class.description() {
            header = header.with_description(description);
        }
        Some(derive_schema_pair(class.properties(), &header))
    }

    /// Returns `true` when `id` is `scope` or hangs below it through a chain
    /// of directories.
    pub(crate) fn is_within(&self, id: ClassId, scope: ClassId) -> bool {
        let mut current = self.tree.node(id);
        while let Some(node) = current {
            if node.id() == scope {
                return true;
            }
            current = node
                .parent()
                .and_then(|parent| self.tree.node(parent))
                .filter(|parent| parent.is_directory());
        }
        false
    }

    // Children of a directory re-registered as an item are unreachable.
    fn is_reachable(&self, node: &RegistryNode) -> bool {
        let mut parent = node.parent();
        while let Some(id) = parent {
            let Some(ancestor) = self.tree.node(id).filter(|ancestor| ancestor.is_directory())
            else {
                return false;
            };
            parent = ancestor.parent();
        }
        true
    }

    fn attach(
        &mut self,
        class: BackendClass,
        parent: ClassId,
        options: RegisterOptions,
        kind: NodeKind,
    ) -> RegistrationResult<ClassId> {
        let result = self.try_attach(class, parent, options, kind);
        if let Err(err) = &result {
            warn!(%err, "rejected backend registration");
        }
        result
    }

    fn try_attach(
        &mut self,
        class: BackendClass,
        parent: ClassId,
        options: RegisterOptions,
        kind: NodeKind,
    ) -> RegistrationResult<ClassId> {
        let parent_name = {
            let parent_node = self
                .tree
                .node(parent)
                .ok_or(RegistrationError::UnknownParent(parent))?;
            if !parent_node.is_directory() {
                return Err(RegistrationError::ParentNotDirectory(
                    parent_node.name().clone(),
                ));
            }
            parent_node.name().clone()
        };

        let id = class.id();
        if let Some(existing) = self.tree.node_mut(id) {
            if existing.parent() != Some(parent) {
                return Err(RegistrationError::AlreadyAttached {
                    name: existing.name().clone(),
                });
            }
            existing.set_kind(kind);
            debug!(name = %existing.name(), %kind, "re-registered backend class");
            return Ok(id);
        }

        let (name, aliases) = self.naming(&class, options)?;
        self.check_scope(parent, &parent_name, &name, &aliases)?;
        if self.config.alias_scope == AliasScope::Global {
            self.check_global_aliases(&aliases)?;
        }

        debug!(%name, %kind, parent = %parent_name, "registered backend class");
        self.tree
            .insert(RegistryNode::new(class, name, aliases, kind, Some(parent)));
        Ok(id)
    }

    fn naming(
        &self,
        class: &BackendClass,
        options: RegisterOptions,
    ) -> RegistrationResult<(BackendName, Vec<BackendName>)> {
        let name = match options.name.as_deref().or_else(|| class.declared_name()) {
            Some(explicit) => BackendName::new(explicit)?,
            None => BackendName::new(format_class_name(
                class.type_name(),
                class.ancestors(),
                self.config.strip_depth,
            ))?,
        };

        let declared = options.aliases.unwrap_or_else(|| class.aliases().to_vec());
        let mut aliases: Vec<BackendName> = Vec::with_capacity(declared.len());
        for raw in declared {
            let alias = BackendName::new(raw)?;
            if alias != name && !aliases.contains(&alias) {
                aliases.push(alias);
            }
        }
        Ok((name, aliases))
    }

    fn check_scope(
        &self,
        directory: ClassId,
        scope_name: &BackendName,
        name: &BackendName,
        aliases: &[BackendName],
    ) -> RegistrationResult<()> {
        let Some(directory) = self.tree.node(directory) else {
            return Ok(());
        };
        let siblings = directory
            .children()
            .values()
            .filter_map(|id| self.tree.node(*id));
        for sibling in siblings {
            if sibling.answers_to(name.as_str()) {
                return Err(RegistrationError::DuplicateName {
                    name: name.clone(),
                    scope: scope_name.clone(),
                });
            }
            if let Some(alias) = aliases.iter().find(|alias| sibling.answers_to(alias.as_str())) {
                return Err(RegistrationError::DuplicateAlias {
                    alias: alias.clone(),
                    owner: sibling.name().clone(),
                });
            }
        }
        Ok(())
    }

    fn check_global_aliases(&self, aliases: &[BackendName]) -> RegistrationResult<()> {
        for node in self.tree.nodes().filter(|node| self.is_reachable(node)) {
            if let Some(alias) = aliases.iter().find(|alias| node.has_alias(alias.as_str())) {
                return Err(RegistrationError::DuplicateAlias {
                    alias: alias.clone(),
                    owner: node.name().clone(),
                });
            }
        }
        Ok(())
    }
}
