//! Subscribe/emit notifications attached to backend instances.

use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Callback invoked with an event payload.
pub type Listener = Arc<dyn Fn(&Value) + Send + Sync>;

/// Handle returned by [`EventHub::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Per-instance event listeners, keyed by event name.
///
/// Listeners run synchronously in subscription order.
#[derive(Clone, Default)]
pub struct EventHub {
    listeners: IndexMap<String, Vec<(SubscriptionId, Listener)>>,
    next_id: u64,
}

impl EventHub {
    /// Creates a hub without listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` for `event`.
    pub fn subscribe(
        &mut self,
        event: impl Into<String>,
        listener: impl Fn(&Value) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(event.into())
            .or_default()
            .push((id, Arc::new(listener)));
        id
    }

    /// Removes a listener. Returns `true` when it was subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let mut removed = false;
        for listeners in self.listeners.values_mut() {
            let before = listeners.len();
            listeners.retain(|(candidate, _)| *candidate != id);
            removed |= listeners.len() != before;
        }
        removed
    }

    /// Invokes every listener of `event` and returns how many ran.
    pub fn emit(&self, event: &str, payload: &Value) -> usize {
        let Some(listeners) = self.listeners.get(event) else {
            return 0;
        };
        for (_, listener) in listeners {
            listener(payload);
        }
        listeners.len()
    }

    /// Returns the number of listeners subscribed to `event`.
    #[must_use]
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.get(event).map_or(0, Vec::len)
    }
}

impl fmt::Debug for EventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: IndexMap<&str, usize> = self
            .listeners
            .iter()
            .map(|(event, listeners)| (event.as_str(), listeners.len()))
            .collect();
        f.debug_struct("EventHub").field("listeners", &counts).finish()
    }
}
