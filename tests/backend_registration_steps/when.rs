//! When steps for backend registration BDD scenarios.

use super::world::RegistryWorld;
use backend_registry::{backend::domain::BackendArgs, registry::domain::TypeRef};
use eyre::eyre;
use rstest_bdd_macros::when;

#[when(r#"item "{type_name}" is registered under the root"#)]
fn register_item(world: &mut RegistryWorld, type_name: String) -> Result<(), eyre::Report> {
    let class = world.declare(&type_name, &[], true)?;
    let (_, root) = world.registry()?;
    world
        .register_item(class, root)?
        .as_ref()
        .map_err(|err| eyre!("unexpected registration failure: {err}"))?;
    Ok(())
}

#[when(r#"a second class named "{type_name}" is registered under the root"#)]
fn register_duplicate(world: &mut RegistryWorld, type_name: String) -> Result<(), eyre::Report> {
    let class = world.declare(&type_name, &[], true)?;
    let (_, root) = world.registry()?;
    world.register_item(class, root)?;
    Ok(())
}

#[when(r#"the root constructs "{requested}""#)]
fn construct_through_root(world: &mut RegistryWorld, requested: String) -> Result<(), eyre::Report> {
    let (registry, root) = world.registry()?;
    let result = registry.create(root, requested.as_str(), BackendArgs::new());
    world.last_construction = Some(result);
    Ok(())
}

#[when(r#""{name}" is unregistered from the root"#)]
fn unregister_from_root(world: &mut RegistryWorld, name: String) -> Result<(), eyre::Report> {
    let (registry, root) = world.registry_mut()?;
    if !registry.unregister(root, Some(&TypeRef::from(name.as_str()))) {
        return Err(eyre!("nothing was removed for {name}"));
    }
    Ok(())
}
