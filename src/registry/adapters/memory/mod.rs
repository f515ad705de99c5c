//! In-memory registry tree adapter.

mod tree;

pub use tree::InMemoryClassTree;
