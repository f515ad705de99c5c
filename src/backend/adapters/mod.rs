//! Backend implementations shipped with the crate.

pub mod generic;

pub use generic::GenericBackend;
