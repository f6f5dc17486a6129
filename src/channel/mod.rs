//! Channel layer: adapter over the shared lobby message store.

mod client;
mod store;
mod updates;

pub use client::{ChannelAdapter, ChannelInitError};
pub use store::{MessageStore, StoreError, StoredMessage};

/// Returns the channel module name for smoke checks.
pub fn module_name() -> &'static str {
    "channel"
}
