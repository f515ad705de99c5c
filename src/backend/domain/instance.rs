//! Constructed backend instance.

use super::{BackendProps, EventHub};
use crate::backend::ports::Backend;
use crate::registry::domain::{BackendName, ClassId};

/// A backend produced by the registry, tagged with the class that built it.
#[derive(Debug)]
pub struct BackendInstance {
    class_id: ClassId,
    class_name: BackendName,
    backend: Box<dyn Backend>,
    events: EventHub,
}

impl BackendInstance {
    /// Wraps an initialized backend.
    #[must_use]
    pub fn new(class_id: ClassId, class_name: BackendName, backend: Box<dyn Backend>) -> Self {
        Self {
            class_id,
            class_name,
            backend,
            events: EventHub::new(),
        }
    }

    /// Returns the identity of the class that constructed this instance.
    #[must_use]
    pub const fn class_id(&self) -> ClassId {
        self.class_id
    }

    /// Returns the canonical name of the constructing class.
    #[must_use]
    pub const fn class_name(&self) -> &BackendName {
        &self.class_name
    }

    /// Returns the instance name, or the class's canonical name when unset.
    #[must_use]
    pub fn name(&self) -> &str {
        self.props()
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.class_name.as_str())
    }

    /// Returns whether the instance is enabled.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.props().enabled.unwrap_or(true)
    }

    /// Returns the instance properties.
    #[must_use]
    pub fn props(&self) -> &BackendProps {
        self.backend.props()
    }

    /// Returns the underlying backend.
    #[must_use]
    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }

    /// Returns the underlying backend mutably.
    pub fn backend_mut(&mut self) -> &mut dyn Backend {
        self.backend.as_mut()
    }

    /// Returns the concrete backend when it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: Backend + 'static>(&self) -> Option<&T> {
        self.backend.as_any().downcast_ref::<T>()
    }

    /// Returns the instance's event hub.
    #[must_use]
    pub const fn events(&self) -> &EventHub {
        &self.events
    }

    /// Returns the instance's event hub mutably.
    pub const fn events_mut(&mut self) -> &mut EventHub {
        &mut self.events
    }
}
