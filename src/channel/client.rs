use std::{fmt, path::PathBuf, sync::mpsc, time::Duration};

use thiserror::Error;
use tokio::runtime::{Builder, Runtime};

use crate::{
    channel::{
        store::{MessageStore, StoreError},
        updates::ChannelUpdatesMonitor,
    },
    domain::{
        events::ChannelEvent,
        message::{now_unix_ms, ChatMessage},
    },
    infra::config::ChannelConfig,
    usecases::{
        send_message::{MessageSender, SendMessageSourceError},
        subscribe_feed::{FeedSource, FeedSourceError, FeedSubscription},
    },
};

const CHANNEL_APPEND_REJECTED: &str = "CHANNEL_APPEND_REJECTED";
const CHANNEL_SUBSCRIBE_REJECTED: &str = "CHANNEL_SUBSCRIBE_REJECTED";

#[derive(Debug, Error)]
pub enum ChannelInitError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failed to start channel runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Adapter over the shared message store: appends on behalf of the session
/// and spawns the background monitor that replays and streams the feed.
///
/// Timestamps are assigned here, at append time, from the client clock.
pub struct ChannelAdapter {
    runtime: Runtime,
    store: MessageStore,
    store_path: PathBuf,
    poll_interval: Duration,
}

impl ChannelAdapter {
    /// Opens the store at the configured path, falling back to the layout
    /// default shared by every client on the machine.
    pub fn open(config: &ChannelConfig, default_path: PathBuf) -> Result<Self, ChannelInitError> {
        let store_path = config.store_path.clone().unwrap_or(default_path);
        let store = MessageStore::open(&store_path)?;

        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .map_err(ChannelInitError::Runtime)?;

        // interval() rejects a zero period.
        let poll_interval = Duration::from_millis(config.poll_interval_ms.max(1));

        Ok(Self {
            runtime,
            store,
            store_path,
            poll_interval,
        })
    }
}

impl fmt::Debug for ChannelAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelAdapter")
            .field("store_path", &self.store_path)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}

impl MessageSender for ChannelAdapter {
    fn send_message(&self, author: &str, body: &str) -> Result<(), SendMessageSourceError> {
        let message = ChatMessage {
            author: author.to_owned(),
            body: body.to_owned(),
            sent_at_ms: now_unix_ms(),
        };

        self.store.append(&message).map_err(|error| {
            tracing::warn!(
                code = CHANNEL_APPEND_REJECTED,
                error = %error,
                "message append rejected by store"
            );
            map_store_error(&error)
        })
    }
}

impl FeedSource for ChannelAdapter {
    fn subscribe(&mut self) -> Result<Box<dyn FeedSubscription>, FeedSourceError> {
        let (update_tx, update_rx) = mpsc::channel();

        let monitor = ChannelUpdatesMonitor::start(
            &self.runtime,
            self.store_path.clone(),
            self.poll_interval,
            update_tx,
        )
        .map_err(|error| {
            tracing::warn!(
                code = CHANNEL_SUBSCRIBE_REJECTED,
                error = %error,
                "feed subscription rejected"
            );
            FeedSourceError::Unavailable
        })?;

        Ok(Box::new(ChannelSubscription {
            _monitor: monitor,
            update_rx,
        }))
    }
}

/// Live subscription: keeps the monitor alive and exposes its event stream.
/// Dropping it signals the monitor to stop.
struct ChannelSubscription {
    _monitor: ChannelUpdatesMonitor,
    update_rx: mpsc::Receiver<ChannelEvent>,
}

impl FeedSubscription for ChannelSubscription {
    fn try_next(&mut self) -> Option<ChannelEvent> {
        self.update_rx.try_recv().ok()
    }
}

fn map_store_error(error: &StoreError) -> SendMessageSourceError {
    if let StoreError::Append(rusqlite::Error::SqliteFailure(failure, _)) = error {
        if matches!(
            failure.code,
            rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
        ) {
            return SendMessageSourceError::Unavailable;
        }
    }

    SendMessageSourceError::Rejected
}
