//! Port contracts for registry tree storage.
//!
//! Ports define the storage primitives the registry services build their
//! naming and resolution policy on.

pub mod tree;

pub use tree::ClassTree;
