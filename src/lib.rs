//! Backend registry: pluggable implementations with declarative schemas.
//!
//! This crate keeps a named, hierarchical registry of backend
//! implementation classes and derives form-ready schemas from the property
//! declarations each class carries.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and implementations
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`registry`]: Class registration, name/alias resolution and
//!   construction dispatch
//! - [`schema`]: Property declarations and validation/UI schema derivation
//! - [`backend`]: Constructed backend instances and their notifications

pub mod backend;
pub mod registry;
pub mod schema;
