use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use rusqlite::{params, Connection};
use thiserror::Error;

use crate::domain::message::ChatMessage;

/// How long SQLite waits on a locked database before reporting busy.
const BUSY_TIMEOUT: Duration = Duration::from_millis(500);

const INIT_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS messages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    author TEXT NOT NULL,
    body TEXT NOT NULL,
    sent_at_ms INTEGER NOT NULL
)";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open store at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error("failed to append message: {0}")]
    Append(#[source] rusqlite::Error),
    #[error("failed to read messages: {0}")]
    Read(#[source] rusqlite::Error),
}

/// A row as delivered by the store: the message plus the monotonically
/// increasing id that fixes its position in delivery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMessage {
    pub id: i64,
    pub message: ChatMessage,
}

/// Handle on the shared append-only message collection.
///
/// Every client appends to and replays from the same fixed path. WAL mode
/// lets concurrent clients keep reading while another one appends. Rows are
/// never updated or deleted.
pub struct MessageStore {
    conn: Connection,
}

impl MessageStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let map_open = |source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        };

        let conn = Connection::open(path).map_err(map_open)?;
        conn.busy_timeout(BUSY_TIMEOUT).map_err(map_open)?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(map_open)?;
        conn.execute(INIT_SCHEMA, []).map_err(map_open)?;

        Ok(Self { conn })
    }

    /// Appends one message. The assigned row id fixes its delivery position
    /// for every subscriber.
    pub fn append(&self, message: &ChatMessage) -> Result<(), StoreError> {
        self.conn
            .execute(
                "INSERT INTO messages (author, body, sent_at_ms) VALUES (?1, ?2, ?3)",
                params![message.author, message.body, message.sent_at_ms],
            )
            .map_err(StoreError::Append)?;

        Ok(())
    }

    /// Returns every row with an id greater than `cursor`, in id order.
    /// A cursor of zero replays the full history.
    pub fn fetch_after(&self, cursor: i64) -> Result<Vec<StoredMessage>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, author, body, sent_at_ms FROM messages \
                 WHERE id > ?1 ORDER BY id ASC",
            )
            .map_err(StoreError::Read)?;

        let rows = stmt
            .query_map(params![cursor], |row| {
                Ok(StoredMessage {
                    id: row.get(0)?,
                    message: ChatMessage {
                        author: row.get(1)?,
                        body: row.get(2)?,
                        sent_at_ms: row.get(3)?,
                    },
                })
            })
            .map_err(StoreError::Read)?;

        let mut messages = Vec::new();
        for row in rows {
            messages.push(row.map_err(StoreError::Read)?);
        }

        Ok(messages)
    }
}
