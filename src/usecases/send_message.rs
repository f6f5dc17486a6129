//! Use case for appending a message to the shared lobby feed.
//!
//! Validates the composed text and delegates to the channel's `MessageSender`.
//! The caller keeps the composed text when a send fails so the user can retry.

/// Command to append one message under the session identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageCommand {
    pub author: String,
    pub body: String,
}

/// Errors reported by the channel adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendMessageSourceError {
    /// The store is temporarily unreachable (busy/locked).
    Unavailable,
    /// The store refused the append outright.
    Rejected,
}

/// Domain-level errors for the send operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendMessageError {
    /// Body is empty after trimming whitespace.
    EmptyBody,
    /// The store is temporarily unreachable; a retry may succeed.
    TemporarilyUnavailable,
    /// The store refused the append.
    Rejected,
}

/// Trait for appending messages to the shared feed.
pub trait MessageSender {
    /// Appends a message under the given author name. The implementation
    /// assigns the timestamp at append time.
    ///
    /// # Errors
    /// Returns `SendMessageSourceError` when the append did not happen.
    fn send_message(&self, author: &str, body: &str) -> Result<(), SendMessageSourceError>;
}

impl<T: MessageSender + ?Sized> MessageSender for &T {
    fn send_message(&self, author: &str, body: &str) -> Result<(), SendMessageSourceError> {
        (*self).send_message(author, body)
    }
}

/// Sends a message to the shared feed.
///
/// Trims the body, rejects empty input, and maps source errors to domain
/// errors. Exactly one store entry results from a successful call.
///
/// # Errors
/// Returns `SendMessageError::EmptyBody` if the body is empty/whitespace.
/// Maps source errors to domain errors for the other failure cases.
pub fn send_message(
    sender: &dyn MessageSender,
    command: SendMessageCommand,
) -> Result<(), SendMessageError> {
    let body = command.body.trim();
    if body.is_empty() {
        return Err(SendMessageError::EmptyBody);
    }

    sender
        .send_message(&command.author, body)
        .map_err(map_source_error)
}

fn map_source_error(error: SendMessageSourceError) -> SendMessageError {
    match error {
        SendMessageSourceError::Unavailable => SendMessageError::TemporarilyUnavailable,
        SendMessageSourceError::Rejected => SendMessageError::Rejected,
    }
}
