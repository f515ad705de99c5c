//! Schema derivation services.

mod base;
mod derive;

pub use base::base_backend_properties;
pub use derive::{capitalize, derive_schema_pair, derive_ui_schema, derive_validation_schema};
