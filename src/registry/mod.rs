//! Hierarchical registry of pluggable backend classes.
//!
//! Classes register as directories (sub-registries) or items (terminal
//! implementations) under a root directory. The registry resolves names,
//! aliases and paths to classes and builds instances of the resolved class
//! on request. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
