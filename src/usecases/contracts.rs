use anyhow::Result;

use crate::domain::{events::AppEvent, session_state::SessionState};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &SessionState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
    /// Drains pending channel events into the session state.
    fn poll_channel(&mut self) -> Result<()>;
}
