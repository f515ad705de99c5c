//! Port contracts implemented by concrete backends.

pub mod backend;

pub use backend::{Backend, BackendFactory, factory};
