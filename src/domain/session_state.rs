use super::{
    events::ChannelHealth, feed_state::FeedState, identity::DisplayName, input_state::InputState,
    theme::Theme,
};

/// Which view the session is in. There is no path back to identity setup
/// within a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    AwaitingIdentity,
    ChatActive,
}

/// Inline user-facing notice shown near the input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
}

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// All mutable state of one client session, built at startup and dropped on
/// exit. Everything the renderer shows lives here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    running: bool,
    phase: SessionPhase,
    identity: Option<DisplayName>,
    theme: Theme,
    channel_health: ChannelHealth,
    notice: Option<Notice>,
    input: InputState,
    feed: FeedState,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            running: true,
            phase: SessionPhase::AwaitingIdentity,
            identity: None,
            theme: Theme::default(),
            channel_health: ChannelHealth::default(),
            notice: None,
            input: InputState::default(),
            feed: FeedState::default(),
        }
    }
}

impl SessionState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn identity(&self) -> Option<&DisplayName> {
        self.identity.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn channel_health(&self) -> ChannelHealth {
        self.channel_health
    }

    pub fn set_channel_health(&mut self, health: ChannelHealth) {
        self.channel_health = health;
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn feed(&self) -> &FeedState {
        &self.feed
    }

    pub fn feed_mut(&mut self) -> &mut FeedState {
        &mut self.feed
    }

    /// Establishes the session identity and switches to the chat view.
    /// The input field and any setup notice are reset for composing.
    pub fn activate_chat(&mut self, identity: DisplayName) {
        self.identity = Some(identity);
        self.phase = SessionPhase::ChatActive;
        self.input.clear();
        self.notice = None;
    }
}
