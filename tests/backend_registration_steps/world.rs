//! Shared world state for backend registration BDD scenarios.

use backend_registry::{
    backend::{adapters::GenericBackend, domain::BackendInstance},
    registry::{
        domain::{BackendClass, ClassId, RegistryConfig},
        services::{
            BackendRegistry, ConstructionResult, RegisterOptions, RegistrationResult,
        },
    },
};
use eyre::{WrapErr, eyre};
use rstest::fixture;

/// Scenario world for backend registration behaviour tests.
#[derive(Default)]
pub struct RegistryWorld {
    /// Registry under test.
    pub registry: Option<BackendRegistry>,
    /// Root directory of the registry.
    pub root: Option<ClassId>,
    /// Declaration of the root class, extended by scenario classes.
    pub root_class: Option<BackendClass>,
    /// Result of the last registration attempt.
    pub last_registration: Option<RegistrationResult<ClassId>>,
    /// Result of the last construction attempt.
    pub last_construction: Option<ConstructionResult<BackendInstance>>,
}

impl RegistryWorld {
    /// Returns the registry and its root, failing when no registry was set
    /// up.
    pub fn registry(&self) -> Result<(&BackendRegistry, ClassId), eyre::Report> {
        let registry = self
            .registry
            .as_ref()
            .ok_or_else(|| eyre!("no registry in scenario world"))?;
        let root = self.root.ok_or_else(|| eyre!("no root in scenario world"))?;
        Ok((registry, root))
    }

    /// Returns the registry mutably together with its root.
    pub fn registry_mut(&mut self) -> Result<(&mut BackendRegistry, ClassId), eyre::Report> {
        let root = self.root.ok_or_else(|| eyre!("no root in scenario world"))?;
        let registry = self
            .registry
            .as_mut()
            .ok_or_else(|| eyre!("no registry in scenario world"))?;
        Ok((registry, root))
    }

    /// Declares a class extending the root, instantiable when `item` is set.
    pub fn declare(
        &self,
        type_name: &str,
        aliases: &[&str],
        item: bool,
    ) -> Result<BackendClass, eyre::Report> {
        let root_class = self
            .root_class
            .as_ref()
            .ok_or_else(|| eyre!("no root class in scenario world"))?;
        let mut builder = BackendClass::builder(type_name)
            .extends(root_class)
            .aliases(aliases.iter().copied());
        if item {
            builder = builder.factory(GenericBackend::factory());
        }
        builder
            .build()
            .wrap_err_with(|| format!("declare class {type_name}"))
    }

    /// Registers `class` as an item under `parent` and records the outcome.
    pub fn register_item(
        &mut self,
        class: BackendClass,
        parent: ClassId,
    ) -> Result<&RegistrationResult<ClassId>, eyre::Report> {
        let (registry, _) = self.registry_mut()?;
        let result = registry.register_item(class, parent, RegisterOptions::new());
        Ok(self.last_registration.insert(result))
    }
}

/// Fixture that creates an empty scenario world.
#[fixture]
pub fn world() -> RegistryWorld {
    RegistryWorld::default()
}

/// Builds a registry rooted at the default backend class.
pub fn default_registry() -> Result<(BackendRegistry, ClassId, BackendClass), eyre::Report> {
    let (registry, root) = BackendRegistry::with_default_root(RegistryConfig::default())
        .wrap_err("register default root")?;
    let root_class = registry
        .node(root)
        .ok_or_else(|| eyre!("root missing after registration"))?
        .class()
        .clone();
    Ok((registry, root, root_class))
}
