//! Backend class declaration.

use super::{BackendDomainError, ClassId};
use crate::backend::ports::BackendFactory;
use crate::schema::{
    domain::{DefineMode, PropertySchema},
    ports::DescriptorStore,
};
use std::fmt;
use tracing::warn;

/// Declaration of one backend implementation class.
///
/// A class carries its identity, the identifiers of the classes it extends
/// (nearest first), naming metadata, its flattened property declaration and,
/// when instantiable, a factory. Extending a class inherits its properties
/// and factory but not its name, aliases, title or description.
#[derive(Clone)]
pub struct BackendClass {
    id: ClassId,
    type_name: String,
    ancestors: Vec<String>,
    name: Option<String>,
    aliases: Vec<String>,
    enabled: bool,
    title: Option<String>,
    description: Option<String>,
    properties: PropertySchema,
    factory: Option<BackendFactory>,
}

impl BackendClass {
    /// Starts declaring a class identified by `type_name`.
    #[must_use]
    pub fn builder(type_name: impl Into<String>) -> BackendClassBuilder {
        BackendClassBuilder {
            class: Self {
                id: ClassId::new(),
                type_name: type_name.into().trim().to_owned(),
                ancestors: Vec::new(),
                name: None,
                aliases: Vec::new(),
                enabled: true,
                title: None,
                description: None,
                properties: PropertySchema::new(),
                factory: None,
            },
        }
    }

    /// Returns the class identity.
    #[must_use]
    pub const fn id(&self) -> ClassId {
        self.id
    }

    /// Returns the declared type identifier, e.g. `OpenAIBackend`.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the identifiers of extended classes, nearest first.
    #[must_use]
    pub fn ancestors(&self) -> &[String] {
        &self.ancestors
    }

    /// Returns the explicitly declared name.
    #[must_use]
    pub fn declared_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the declared aliases.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Returns the declared availability flag.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the class description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the factory, or `None` for abstract classes.
    #[must_use]
    pub const fn factory(&self) -> Option<&BackendFactory> {
        self.factory.as_ref()
    }

    /// Returns `true` when the class cannot be instantiated itself.
    #[must_use]
    pub const fn is_abstract(&self) -> bool {
        self.factory.is_none()
    }
}

impl DescriptorStore for BackendClass {
    fn define_properties(
        &mut self,
        declaration: PropertySchema,
        mode: DefineMode,
    ) -> &PropertySchema {
        self.properties = self.properties.define(declaration, mode);
        for issue in self.properties.issues() {
            warn!(class = %self.type_name, %issue, "malformed property descriptor");
        }
        &self.properties
    }

    fn properties(&self) -> &PropertySchema {
        &self.properties
    }
}

impl fmt::Debug for BackendClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendClass")
            .field("id", &self.id)
            .field("type_name", &self.type_name)
            .field("ancestors", &self.ancestors)
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("enabled", &self.enabled)
            .field("properties", &self.properties.len())
            .field("abstract", &self.is_abstract())
            .finish_non_exhaustive()
    }
}

/// Builder returned by [`BackendClass::builder`].
#[derive(Debug, Clone)]
pub struct BackendClassBuilder {
    class: BackendClass,
}

impl BackendClassBuilder {
    /// Extends `base`: records it as nearest ancestor and inherits its
    /// properties, availability flag and factory.
    #[must_use]
    pub fn extends(mut self, base: &BackendClass) -> Self {
        let mut ancestors = Vec::with_capacity(base.ancestors.len() + 1);
        ancestors.push(base.type_name.clone());
        ancestors.extend(base.ancestors.iter().cloned());
        self.class.ancestors = ancestors;
        self.class.properties = base.properties.clone();
        self.class.enabled = base.enabled;
        self.class.factory = base.factory.clone();
        self
    }

    /// Declares an explicit canonical name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.class.name = Some(name.into());
        self
    }

    /// Adds one alias.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.class.aliases.push(alias.into());
        self
    }

    /// Adds several aliases.
    #[must_use]
    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Sets the availability flag.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.class.enabled = enabled;
        self
    }

    /// Sets the display title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.class.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.class.description = Some(description.into());
        self
    }

    /// Merges `declaration` into the inherited properties.
    #[must_use]
    pub fn properties(self, declaration: PropertySchema) -> Self {
        self.define_properties(declaration, DefineMode::Merge)
    }

    /// Installs `declaration` according to `mode`.
    #[must_use]
    pub fn define_properties(mut self, declaration: PropertySchema, mode: DefineMode) -> Self {
        DescriptorStore::define_properties(&mut self.class, declaration, mode);
        self
    }

    /// Makes the class instantiable through `factory`.
    #[must_use]
    pub fn factory(mut self, factory: BackendFactory) -> Self {
        self.class.factory = Some(factory);
        self
    }

    /// Marks the class abstract, dropping any inherited factory.
    #[must_use]
    pub fn abstract_class(mut self) -> Self {
        self.class.factory = None;
        self
    }

    /// Finishes the declaration.
    ///
    /// # Errors
    ///
    /// Returns [`BackendDomainError::EmptyTypeName`] when the type identifier
    /// is empty.
    pub fn build(self) -> Result<BackendClass, BackendDomainError> {
        if self.class.type_name.is_empty() {
            return Err(BackendDomainError::EmptyTypeName);
        }
        Ok(self.class)
    }
}
