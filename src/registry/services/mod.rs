//! Application services for backend registration, resolution and
//! construction.

mod construction;
mod registry;

pub use construction::{ConstructionError, ConstructionResult};
pub use registry::{
    BackendRegistry, ListedClass, ROOT_TYPE_NAME, RegisterOptions, RegistrationError,
    RegistrationResult, Visit,
};
