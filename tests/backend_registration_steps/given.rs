//! Given steps for backend registration BDD scenarios.

use super::world::{RegistryWorld, default_registry};
use backend_registry::registry::services::RegisterOptions;
use eyre::{WrapErr, eyre};
use rstest_bdd_macros::given;

#[given("a registry rooted at the default backend class")]
fn default_root(world: &mut RegistryWorld) -> Result<(), eyre::Report> {
    let (registry, root, root_class) = default_registry()?;
    world.registry = Some(registry);
    world.root = Some(root);
    world.root_class = Some(root_class);
    Ok(())
}

#[given(r#"a registered item "{type_name}" under the root"#)]
fn registered_item(world: &mut RegistryWorld, type_name: String) -> Result<(), eyre::Report> {
    let class = world.declare(&type_name, &[], true)?;
    let (_, root) = world.registry()?;
    world
        .register_item(class, root)?
        .as_ref()
        .map_err(|err| eyre!("register {type_name}: {err}"))?;
    Ok(())
}

#[given(r#"a registered item "{type_name}" under the root with alias "{alias}""#)]
fn registered_item_with_alias(
    world: &mut RegistryWorld,
    type_name: String,
    alias: String,
) -> Result<(), eyre::Report> {
    let class = world.declare(&type_name, &[alias.as_str()], true)?;
    let (_, root) = world.registry()?;
    world
        .register_item(class, root)?
        .as_ref()
        .map_err(|err| eyre!("register {type_name}: {err}"))?;
    Ok(())
}

#[given(r#"a registered directory "{type_name}" under the root"#)]
fn registered_directory(world: &mut RegistryWorld, type_name: String) -> Result<(), eyre::Report> {
    let class = world.declare(&type_name, &[], false)?;
    let (registry, root) = world.registry_mut()?;
    registry
        .register_directory(class, root, RegisterOptions::new())
        .wrap_err_with(|| format!("register directory {type_name}"))?;
    Ok(())
}

#[given(r#"a registered item "{type_name}" under directory "{directory}""#)]
fn registered_item_in_directory(
    world: &mut RegistryWorld,
    type_name: String,
    directory: String,
) -> Result<(), eyre::Report> {
    let class = world.declare(&type_name, &[], true)?;
    let (registry, root) = world.registry()?;
    let parent = registry
        .resolve(root, &directory)
        .ok_or_else(|| eyre!("directory {directory} is not registered"))?;
    world
        .register_item(class, parent)?
        .as_ref()
        .map_err(|err| eyre!("register {type_name}: {err}"))?;
    Ok(())
}
