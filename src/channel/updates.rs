use std::{path::PathBuf, sync::mpsc::Sender, time::Duration};

use tokio::{runtime::Runtime, sync::watch, time};

use crate::{channel::store::MessageStore, domain::events::ChannelEvent};

const CHANNEL_MONITOR_STARTED: &str = "CHANNEL_MONITOR_STARTED";
const CHANNEL_MONITOR_STOPPED: &str = "CHANNEL_MONITOR_STOPPED";
const CHANNEL_MONITOR_STOP_SIGNALED: &str = "CHANNEL_MONITOR_STOP_SIGNALED";
const CHANNEL_MONITOR_STORE_OPEN_FAILED: &str = "CHANNEL_MONITOR_STORE_OPEN_FAILED";
const CHANNEL_MONITOR_READ_FAILED: &str = "CHANNEL_MONITOR_READ_FAILED";
const CHANNEL_MONITOR_SIGNAL_SEND_FAILED: &str = "CHANNEL_MONITOR_SIGNAL_SEND_FAILED";

/// Background task that replays the store and then streams new rows to the
/// shell over `update_tx`, in store delivery order. Dropping the monitor
/// signals the task to stop.
#[derive(Debug)]
pub struct ChannelUpdatesMonitor {
    stop_tx: Option<watch::Sender<bool>>,
}

impl ChannelUpdatesMonitor {
    pub fn start(
        runtime: &Runtime,
        store_path: PathBuf,
        poll_interval: Duration,
        update_tx: Sender<ChannelEvent>,
    ) -> Result<Self, MonitorStartError> {
        if std::env::var("RALLY_CHANNEL_MONITOR_FAIL")
            .ok()
            .as_deref()
            == Some("1")
        {
            return Err(MonitorStartError::StartupRejected);
        }

        let (stop_tx, stop_rx) = watch::channel(false);
        runtime.spawn(run_monitor(store_path, poll_interval, update_tx, stop_rx));

        tracing::info!(
            code = CHANNEL_MONITOR_STARTED,
            "channel updates monitor started"
        );

        Ok(Self {
            stop_tx: Some(stop_tx),
        })
    }
}

impl Drop for ChannelUpdatesMonitor {
    fn drop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(true);
            tracing::debug!(
                code = CHANNEL_MONITOR_STOP_SIGNALED,
                "channel updates monitor shutdown signal sent"
            );
        }
    }
}

async fn run_monitor(
    store_path: PathBuf,
    poll_interval: Duration,
    update_tx: Sender<ChannelEvent>,
    mut stop_rx: watch::Receiver<bool>,
) {
    let store = match MessageStore::open(&store_path) {
        Ok(store) => store,
        Err(error) => {
            tracing::error!(
                code = CHANNEL_MONITOR_STORE_OPEN_FAILED,
                error = %error,
                "channel monitor could not open the store"
            );
            let _ = update_tx.send(ChannelEvent::Fault {
                code: CHANNEL_MONITOR_STORE_OPEN_FAILED.to_owned(),
            });
            return;
        }
    };

    let mut cursor = 0i64;
    let mut ticker = time::interval(poll_interval);

    loop {
        tokio::select! {
            changed = stop_rx.changed() => {
                if changed.is_err() || *stop_rx.borrow() {
                    tracing::info!(
                        code = CHANNEL_MONITOR_STOPPED,
                        "channel updates monitor stopped"
                    );
                    return;
                }
            }
            _ = ticker.tick() => {
                match store.fetch_after(cursor) {
                    Ok(batch) => {
                        for stored in batch {
                            cursor = stored.id;
                            if update_tx.send(ChannelEvent::Message(stored.message)).is_err() {
                                tracing::warn!(
                                    code = CHANNEL_MONITOR_SIGNAL_SEND_FAILED,
                                    "channel monitor receiver dropped; stopping"
                                );
                                return;
                            }
                        }
                    }
                    Err(error) => {
                        tracing::warn!(
                            code = CHANNEL_MONITOR_READ_FAILED,
                            error = %error,
                            "channel monitor read failed; keeping monitor alive"
                        );
                        let _ = update_tx.send(ChannelEvent::Fault {
                            code: CHANNEL_MONITOR_READ_FAILED.to_owned(),
                        });
                    }
                }
            }
        }
    }
}

#[derive(Debug)]
pub enum MonitorStartError {
    StartupRejected,
}

impl std::fmt::Display for MonitorStartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StartupRejected => f.write_str("startup rejected by test switch"),
        }
    }
}

impl std::error::Error for MonitorStartError {}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::{channel::store::MessageStore, domain::message::ChatMessage};

    const RECV_DEADLINE: Duration = Duration::from_secs(5);

    fn msg(body: &str) -> ChatMessage {
        ChatMessage {
            author: "Ann".to_owned(),
            body: body.to_owned(),
            sent_at_ms: 10,
        }
    }

    fn test_runtime() -> Runtime {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .expect("runtime builds")
    }

    fn recv_message(rx: &mpsc::Receiver<ChannelEvent>) -> ChatMessage {
        match rx.recv_timeout(RECV_DEADLINE).expect("event within deadline") {
            ChannelEvent::Message(message) => message,
            ChannelEvent::Fault { code } => panic!("unexpected fault: {code}"),
        }
    }

    #[test]
    fn replays_existing_rows_then_streams_new_ones() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("messages.db3");

        let store = MessageStore::open(&path).expect("store opens");
        store.append(&msg("history-1")).expect("append");
        store.append(&msg("history-2")).expect("append");

        let runtime = test_runtime();
        let (tx, rx) = mpsc::channel();
        let _monitor =
            ChannelUpdatesMonitor::start(&runtime, path.clone(), Duration::from_millis(20), tx)
                .expect("monitor starts");

        assert_eq!(recv_message(&rx).body, "history-1");
        assert_eq!(recv_message(&rx).body, "history-2");

        store.append(&msg("live")).expect("append");

        assert_eq!(recv_message(&rx).body, "live");
    }

    #[test]
    fn reports_fault_when_store_cannot_be_opened() {
        let dir = tempfile::tempdir().expect("temp dir");
        // A directory at the database path makes the open fail.
        let path = dir.path().join("not-a-db");
        std::fs::create_dir(&path).expect("dir created");

        let runtime = test_runtime();
        let (tx, rx) = mpsc::channel();
        let _monitor =
            ChannelUpdatesMonitor::start(&runtime, path, Duration::from_millis(20), tx)
                .expect("monitor starts");

        match rx.recv_timeout(RECV_DEADLINE).expect("event within deadline") {
            ChannelEvent::Fault { code } => assert_eq!(code, CHANNEL_MONITOR_STORE_OPEN_FAILED),
            ChannelEvent::Message(message) => panic!("unexpected message: {message:?}"),
        }
    }
}
