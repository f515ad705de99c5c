//! Domain model for constructed backend instances.

mod error;
mod events;
mod instance;
mod props;

pub use error::BackendInitError;
pub use events::{EventHub, Listener, SubscriptionId};
pub use instance::BackendInstance;
pub use props::{AliasList, BackendArgs, BackendProps};
