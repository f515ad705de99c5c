//! Then steps for backend registration BDD scenarios.

use super::world::RegistryWorld;
use backend_registry::{
    backend::domain::BackendInstance,
    registry::services::{ConstructionError, RegistrationError, Visit},
};
use eyre::eyre;
use rstest_bdd_macros::then;

fn listed_names(world: &RegistryWorld) -> Result<Vec<String>, eyre::Report> {
    let (registry, root) = world.registry()?;
    Ok(registry
        .for_each(root, |_, _| Visit::Continue)
        .into_iter()
        .map(|entry| entry.name)
        .collect())
}

fn constructed(world: &RegistryWorld) -> Result<&BackendInstance, eyre::Report> {
    world
        .last_construction
        .as_ref()
        .ok_or_else(|| eyre!("missing construction result in scenario world"))?
        .as_ref()
        .map_err(|err| eyre!("construction failed: {err}"))
}

#[then(r#"the root lists "{names}""#)]
fn root_lists(world: &RegistryWorld, names: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = names.split(", ").collect();
    let listed = listed_names(world)?;
    if listed != expected {
        return Err(eyre!("expected {expected:?}, listed {listed:?}"));
    }
    Ok(())
}

#[then("the root lists no backends")]
fn root_lists_nothing(world: &RegistryWorld) -> Result<(), eyre::Report> {
    let listed = listed_names(world)?;
    if !listed.is_empty() {
        return Err(eyre!("expected an empty listing, got {listed:?}"));
    }
    Ok(())
}

#[then(r#""{name}" resolves under the root"#)]
fn resolves_under_root(world: &RegistryWorld, name: String) -> Result<(), eyre::Report> {
    let (registry, root) = world.registry()?;
    registry
        .resolve(root, &name)
        .map(|_| ())
        .ok_or_else(|| eyre!("expected {name} to resolve"))
}

#[then(r#""{name}" no longer resolves under the root"#)]
fn no_longer_resolves(world: &RegistryWorld, name: String) -> Result<(), eyre::Report> {
    let (registry, root) = world.registry()?;
    match registry.resolve(root, &name) {
        Some(id) => Err(eyre!("expected {name} to be gone, found {id}")),
        None => Ok(()),
    }
}

#[then("registration fails with a duplicate name error")]
fn duplicate_name_error(world: &RegistryWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_registration
        .as_ref()
        .ok_or_else(|| eyre!("missing registration result in scenario world"))?;
    if !matches!(result, Err(RegistrationError::DuplicateName { .. })) {
        return Err(eyre!("expected duplicate name error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the instance belongs to "{name}""#)]
fn instance_belongs_to(world: &RegistryWorld, name: String) -> Result<(), eyre::Report> {
    let instance = constructed(world)?;
    let (registry, root) = world.registry()?;
    let expected = registry
        .resolve(root, &name)
        .ok_or_else(|| eyre!("{name} is not registered"))?;
    if instance.class_id() != expected {
        return Err(eyre!(
            "expected an instance of {name}, got {}",
            instance.class_name()
        ));
    }
    Ok(())
}

#[then("the instance is enabled")]
fn instance_enabled(world: &RegistryWorld) -> Result<(), eyre::Report> {
    if !constructed(world)?.enabled() {
        return Err(eyre!("expected the instance to be enabled"));
    }
    Ok(())
}

#[then("construction fails because the type is unresolvable")]
fn construction_unresolvable(world: &RegistryWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_construction
        .as_ref()
        .ok_or_else(|| eyre!("missing construction result in scenario world"))?;
    match result {
        Err(ConstructionError::UnresolvableType(_)) => Ok(()),
        Err(other) => Err(eyre!("expected an unresolvable type error, got {other}")),
        Ok(instance) => Err(eyre!(
            "expected construction to fail, built {}",
            instance.class_name()
        )),
    }
}
