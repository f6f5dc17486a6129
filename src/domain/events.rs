use super::message::ChatMessage;

/// Events driving the shell loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    Input(InputAction),
}

/// Editing and control actions produced by the key mapping. The same set
/// serves the name-entry and message-entry views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    InsertChar(char),
    DeleteBackward,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    Submit,
    ToggleTheme,
    ScrollUp,
    ScrollDown,
}

/// Events delivered by a channel subscription: replayed and live messages in
/// store delivery order, plus non-fatal faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelEvent {
    Message(ChatMessage),
    Fault { code: String },
}

/// Observed health of the shared message channel, shown in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelHealth {
    #[default]
    Unknown,
    Live,
    Degraded,
}

impl ChannelHealth {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Live => "live",
            Self::Degraded => "degraded",
        }
    }
}
