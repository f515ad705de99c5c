//! Backend port and factory signature.

use crate::backend::domain::{BackendInitError, BackendProps};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Behaviour every concrete backend implementation provides.
pub trait Backend: fmt::Debug + Send + Sync {
    /// Returns the instance properties.
    fn props(&self) -> &BackendProps;

    /// Returns the instance properties mutably.
    fn props_mut(&mut self) -> &mut BackendProps;

    /// Returns `self` for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;
}

/// Builds an initialized backend from its properties.
pub type BackendFactory =
    Arc<dyn Fn(BackendProps) -> Result<Box<dyn Backend>, BackendInitError> + Send + Sync>;

/// Wraps a constructor function into a [`BackendFactory`].
pub fn factory<B, F>(init: F) -> BackendFactory
where
    B: Backend + 'static,
    F: Fn(BackendProps) -> Result<B, BackendInitError> + Send + Sync + 'static,
{
    Arc::new(move |props| init(props).map(|backend| Box::new(backend) as Box<dyn Backend>))
}
