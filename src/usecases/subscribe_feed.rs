//! Subscription seam between the shell and the channel adapter.

use crate::domain::events::ChannelEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedSourceError {
    /// The channel refused to start a subscription.
    Unavailable,
}

/// A live feed subscription. It replays the full history first and then
/// streams new messages, all in store delivery order. Dropping it tears the
/// stream down.
pub trait FeedSubscription {
    /// Returns the next pending event, or `None` when the stream is idle.
    fn try_next(&mut self) -> Option<ChannelEvent>;
}

pub trait FeedSource {
    fn subscribe(&mut self) -> Result<Box<dyn FeedSubscription>, FeedSourceError>;
}
