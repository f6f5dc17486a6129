//! Shell orchestration: wires input events to the identity, send, and
//! subscription use cases and keeps the session state machine consistent.

use anyhow::Result;

use crate::{
    domain::{
        events::{AppEvent, ChannelEvent, ChannelHealth, InputAction},
        identity::{DisplayName, DisplayNameError},
        session_state::{Notice, SessionPhase, SessionState},
    },
    infra::contracts::ProfileStore,
    usecases::{
        contracts::ShellOrchestrator,
        resolve_identity::{self, IdentityResolution},
        send_message::{self, MessageSender, SendMessageCommand, SendMessageError},
        subscribe_feed::{FeedSource, FeedSubscription},
        toggle_theme,
    },
};

const CHANNEL_SUBSCRIBE_FAILED: &str = "CHANNEL_SUBSCRIBE_FAILED";
const CHANNEL_SUBSCRIPTION_FAULT: &str = "CHANNEL_SUBSCRIPTION_FAULT";

const NAME_TOO_SHORT_NOTICE: &str = "Please enter a display name with at least 2 characters.";
const NAME_TOO_LONG_NOTICE: &str = "Display names are capped at 30 characters.";
const SEND_FAILED_NOTICE: &str = "Failed to send message. Please try again.";
const CHAT_UNAVAILABLE_NOTICE: &str = "Chat is temporarily unavailable. Please try again later.";

pub struct DefaultShellOrchestrator<C, P>
where
    C: MessageSender + FeedSource,
    P: ProfileStore,
{
    state: SessionState,
    subscription: Option<Box<dyn FeedSubscription>>,
    channel: C,
    profile: P,
}

impl<C, P> DefaultShellOrchestrator<C, P>
where
    C: MessageSender + FeedSource,
    P: ProfileStore,
{
    pub fn new(channel: C, profile: P, default_theme: &str) -> Self {
        let mut state = SessionState::default();
        state.set_theme(toggle_theme::resolve_theme(&profile, default_theme));

        Self {
            state,
            subscription: None,
            channel,
            profile,
        }
    }

    /// Resolves the startup phase: an existing identity goes straight to the
    /// chat view with the subscription running; otherwise the setup view.
    pub fn start(&mut self) {
        if let IdentityResolution::Established(name) =
            resolve_identity::resolve_identity(&self.profile)
        {
            self.enter_chat(name);
        }
    }

    fn handle_input(&mut self, action: InputAction) {
        match action {
            InputAction::InsertChar(ch) => {
                self.state.clear_notice();
                self.state.input_mut().insert_char(ch);
            }
            InputAction::DeleteBackward => self.state.input_mut().delete_backward(),
            InputAction::DeleteForward => self.state.input_mut().delete_forward(),
            InputAction::CursorLeft => self.state.input_mut().move_left(),
            InputAction::CursorRight => self.state.input_mut().move_right(),
            InputAction::CursorHome => self.state.input_mut().move_home(),
            InputAction::CursorEnd => self.state.input_mut().move_end(),
            InputAction::Submit => self.submit(),
            InputAction::ToggleTheme => self.toggle_theme(),
            InputAction::ScrollUp => {
                if self.state.phase() == SessionPhase::ChatActive {
                    self.state.feed_mut().scroll_up();
                }
            }
            InputAction::ScrollDown => {
                if self.state.phase() == SessionPhase::ChatActive {
                    self.state.feed_mut().scroll_down();
                }
            }
        }
    }

    fn submit(&mut self) {
        match self.state.phase() {
            SessionPhase::AwaitingIdentity => self.submit_identity(),
            SessionPhase::ChatActive => self.submit_message(),
        }
    }

    fn submit_identity(&mut self) {
        let raw = self.state.input().text().to_owned();

        match resolve_identity::accept_identity(&mut self.profile, &raw) {
            Ok(name) => self.enter_chat(name),
            Err(DisplayNameError::TooShort { .. }) => {
                self.state.set_notice(Notice::error(NAME_TOO_SHORT_NOTICE));
            }
            Err(DisplayNameError::TooLong { .. }) => {
                self.state.set_notice(Notice::error(NAME_TOO_LONG_NOTICE));
            }
        }
    }

    /// Switches to the chat view and starts the subscription, which replays
    /// the full history before streaming new messages.
    fn enter_chat(&mut self, name: DisplayName) {
        self.state.activate_chat(name);

        match self.channel.subscribe() {
            Ok(subscription) => {
                self.subscription = Some(subscription);
            }
            Err(error) => {
                tracing::error!(
                    code = CHANNEL_SUBSCRIBE_FAILED,
                    error = ?error,
                    "feed subscription could not be started"
                );
                self.state.set_channel_health(ChannelHealth::Degraded);
                self.state.set_notice(Notice::error(CHAT_UNAVAILABLE_NOTICE));
            }
        }
    }

    fn submit_message(&mut self) {
        let Some(author) = self.state.identity().map(|name| name.as_str().to_owned()) else {
            return;
        };

        let command = SendMessageCommand {
            author,
            body: self.state.input().text().to_owned(),
        };

        match send_message::send_message(&self.channel, command) {
            Ok(()) => {
                self.state.input_mut().clear();
                self.state.clear_notice();
                self.state.feed_mut().pin_to_latest();
            }
            // Nothing composed: silently keep waiting for input.
            Err(SendMessageError::EmptyBody) => {}
            Err(error) => {
                tracing::warn!(send_error = ?error, "message send failed");
                self.state.set_notice(Notice::error(SEND_FAILED_NOTICE));
            }
        }
    }

    fn toggle_theme(&mut self) {
        let next = toggle_theme::toggle_theme(&mut self.profile, self.state.theme());
        self.state.set_theme(next);
    }
}

impl<C, P> ShellOrchestrator for DefaultShellOrchestrator<C, P>
where
    C: MessageSender + FeedSource,
    P: ProfileStore,
{
    fn state(&self) -> &SessionState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => self.poll_channel()?,
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::Input(action) => self.handle_input(action),
        }

        Ok(())
    }

    fn poll_channel(&mut self) -> Result<()> {
        let Some(subscription) = self.subscription.as_mut() else {
            return Ok(());
        };

        while let Some(event) = subscription.try_next() {
            match event {
                ChannelEvent::Message(message) => {
                    self.state.feed_mut().append(message);
                    self.state.set_channel_health(ChannelHealth::Live);
                }
                ChannelEvent::Fault { code } => {
                    tracing::warn!(
                        code = CHANNEL_SUBSCRIPTION_FAULT,
                        fault = %code,
                        "channel subscription fault"
                    );
                    self.state.set_channel_health(ChannelHealth::Degraded);
                }
            }
        }

        Ok(())
    }
}
