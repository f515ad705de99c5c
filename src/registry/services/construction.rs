//! Construction dispatch through the registry.
//!
//! [`BackendRegistry::create`] is the factory entry point: it resolves the
//! requested type below a base class and builds an instance of whichever
//! class answers. [`BackendRegistry::construct`] builds a known class
//! directly and skips resolution.

use super::BackendRegistry;
use crate::backend::domain::{BackendArgs, BackendInitError, BackendInstance, BackendProps};
use crate::registry::{
    domain::{BackendName, ClassId, TypeRef},
    ports::ClassTree,
};
use crate::schema::ports::DescriptorStore;
use thiserror::Error;
use tracing::debug;

/// Errors returned while constructing a backend instance.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConstructionError {
    /// The requested type does not resolve to a registered class.
    #[error("cannot determine the backend type: {0}")]
    UnresolvableType(String),

    /// The resolved class declares no factory.
    #[error("backend class '{0}' is abstract and cannot be instantiated")]
    NotInstantiable(BackendName),

    /// The factory rejected the arguments.
    #[error(transparent)]
    Initialization(#[from] BackendInitError),
}

/// Result type for construction operations.
pub type ConstructionResult<T> = Result<T, ConstructionError>;

impl<T> BackendRegistry<T>
where
    T: ClassTree,
{
    /// Builds an instance of the class `requested` resolves to below `base`.
    ///
    /// When the requested type resolves to `base` itself, `base` is
    /// constructed. A class reference only resolves when the class is `base`
    /// or reachable below it through directories. Any other registered class,
    /// including one hidden below a directory re-registered as an item, is
    /// reported as unresolvable.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::UnresolvableType`] when nothing answers to
    /// `requested`, [`ConstructionError::NotInstantiable`] when the resolved
    /// class is abstract, or [`ConstructionError::Initialization`] when its
    /// factory fails.
    pub fn create(
        &self,
        base: ClassId,
        requested: impl Into<TypeRef>,
        args: BackendArgs,
    ) -> ConstructionResult<BackendInstance> {
        let requested = requested.into();
        let target = self
            .resolve_type(base, &requested)
            .ok_or_else(|| ConstructionError::UnresolvableType(requested.to_string()))?;
        if target != base {
            debug!(%requested, %target, "delegating construction to resolved class");
        }
        self.construct(target, args)
    }

    /// Builds an instance of `class` without resolution.
    ///
    /// Declared property defaults fill absent arguments; `enabled` defaults
    /// to `true` when still unset after initialization.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::UnresolvableType`] when `class` is not
    /// registered, plus the errors of [`create`](Self::create).
    pub fn construct(&self, class: ClassId, args: BackendArgs) -> ConstructionResult<BackendInstance> {
        let node = self
            .node(class)
            .ok_or_else(|| ConstructionError::UnresolvableType(class.to_string()))?;
        let factory = node
            .class()
            .factory()
            .ok_or_else(|| ConstructionError::NotInstantiable(node.name().clone()))?;

        let mut values = args;
        node.class().properties().apply_defaults(&mut values);
        let props = BackendProps::from_args(values).map_err(BackendInitError::from)?;

        let mut backend = factory(props)?;
        if backend.props().enabled.is_none() {
            backend.props_mut().enabled = Some(true);
        }
        debug!(name = %node.name(), "constructed backend instance");
        Ok(BackendInstance::new(class, node.name().clone(), backend))
    }
}
