use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, ShellOrchestrator},
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        "starting lobby shell"
    );

    let mut terminal = TerminalSession::new()?;

    while orchestrator.state().is_running() {
        orchestrator.poll_channel()?;
        terminal.draw(|frame| view::render(frame, orchestrator.state()))?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::events::{AppEvent, ChannelEvent},
        infra::stubs::MemoryProfileStore,
        ui::event_source::MockEventSource,
        usecases::{
            send_message::{MessageSender, SendMessageSourceError},
            shell::DefaultShellOrchestrator,
            subscribe_feed::{FeedSource, FeedSourceError, FeedSubscription},
        },
    };

    struct IdleChannel;

    impl MessageSender for IdleChannel {
        fn send_message(&self, _author: &str, _body: &str) -> Result<(), SendMessageSourceError> {
            Ok(())
        }
    }

    struct EmptySubscription;

    impl FeedSubscription for EmptySubscription {
        fn try_next(&mut self) -> Option<ChannelEvent> {
            None
        }
    }

    impl FeedSource for IdleChannel {
        fn subscribe(&mut self) -> Result<Box<dyn FeedSubscription>, FeedSourceError> {
            Ok(Box::new(EmptySubscription))
        }
    }

    #[test]
    fn mock_source_produces_quit_event() {
        let mut source = MockEventSource::from(vec![AppEvent::QuitRequested]);

        let event = source.next_event().expect("must read mock event");

        assert_eq!(event, Some(AppEvent::QuitRequested));
    }

    #[test]
    fn orchestrator_stops_on_quit_from_source() {
        let mut source = MockEventSource::from(vec![AppEvent::QuitRequested]);
        let mut orchestrator =
            DefaultShellOrchestrator::new(IdleChannel, MemoryProfileStore::default(), "dark");

        if let Some(event) = source.next_event().expect("must read mock event") {
            orchestrator
                .handle_event(event)
                .expect("must handle quit event");
        }

        assert!(!orchestrator.state().is_running());
    }
}
