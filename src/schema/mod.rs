//! Declarative property schemas and their derived documents.
//!
//! Every backend class carries a [`domain::PropertySchema`]. The
//! [`services`] turn it into a JSON-Schema-shaped validation document and a
//! UI-hint document, independently and without side effects:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Derivation services in [`services`]

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
