//! Adapter implementations for registry tree storage.

pub mod memory;
