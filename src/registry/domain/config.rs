//! Registry configuration.

/// Scope within which an alias must be unique.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AliasScope {
    /// Aliases are unique across every tree in the registry.
    #[default]
    Global,
    /// Aliases are unique among siblings of one directory only.
    Directory,
}

/// Naming and uniqueness policy applied at registration time.
///
/// # Examples
///
/// ```
/// use backend_registry::registry::domain::{AliasScope, RegistryConfig};
///
/// let config = RegistryConfig::default();
/// assert_eq!(config.strip_depth, 1);
/// assert_eq!(config.alias_scope, AliasScope::Global);
///
/// let scoped = RegistryConfig::scoped_aliases();
/// assert_eq!(scoped.alias_scope, AliasScope::Directory);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Number of ancestor identifiers tried as suffixes when formatting a
    /// canonical name. Zero disables stripping.
    pub strip_depth: usize,
    /// Uniqueness scope for aliases.
    pub alias_scope: AliasScope,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            strip_depth: 1,
            alias_scope: AliasScope::Global,
        }
    }
}

impl RegistryConfig {
    /// Configuration that only rejects alias collisions among siblings.
    #[must_use]
    pub fn scoped_aliases() -> Self {
        Self {
            alias_scope: AliasScope::Directory,
            ..Self::default()
        }
    }

    /// Sets the strip depth.
    #[must_use]
    pub const fn with_strip_depth(mut self, strip_depth: usize) -> Self {
        self.strip_depth = strip_depth;
        self
    }
}
