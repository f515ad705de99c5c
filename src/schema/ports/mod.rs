//! Port contracts for property-descriptor storage.

pub mod store;

pub use store::DescriptorStore;
