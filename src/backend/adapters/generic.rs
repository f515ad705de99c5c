//! Property-only backend.

use crate::backend::{
    domain::BackendProps,
    ports::{Backend, BackendFactory, factory},
};
use std::any::Any;

/// Backend that only carries its properties.
///
/// Suitable for classes whose behaviour lives outside the instance, and as
/// the factory of configuration-only registry entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericBackend {
    props: BackendProps,
}

impl GenericBackend {
    /// Creates a backend holding `props`.
    #[must_use]
    pub const fn new(props: BackendProps) -> Self {
        Self { props }
    }

    /// Returns a factory producing [`GenericBackend`] instances.
    #[must_use]
    pub fn factory() -> BackendFactory {
        factory(|props| Ok(Self::new(props)))
    }
}

impl Backend for GenericBackend {
    fn props(&self) -> &BackendProps {
        &self.props
    }

    fn props_mut(&mut self) -> &mut BackendProps {
        &mut self.props
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
