//! Runtime backend instances.
//!
//! Registry construction hands [`domain::BackendProps`] to a class's
//! [`ports::BackendFactory`] and wraps the result in a
//! [`domain::BackendInstance`]:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Bundled implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
