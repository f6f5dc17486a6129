use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, InputAction},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Default)]
pub struct CrosstermEventSource;

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }

            return Ok(map_key(key));
        }

        Ok(None)
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let event = match key.code {
        KeyCode::Esc => AppEvent::QuitRequested,
        KeyCode::Char('c') if ctrl => AppEvent::QuitRequested,
        KeyCode::Char('t') if ctrl => AppEvent::Input(InputAction::ToggleTheme),
        KeyCode::Enter => AppEvent::Input(InputAction::Submit),
        KeyCode::Backspace => AppEvent::Input(InputAction::DeleteBackward),
        KeyCode::Delete => AppEvent::Input(InputAction::DeleteForward),
        KeyCode::Left => AppEvent::Input(InputAction::CursorLeft),
        KeyCode::Right => AppEvent::Input(InputAction::CursorRight),
        KeyCode::Home => AppEvent::Input(InputAction::CursorHome),
        KeyCode::End => AppEvent::Input(InputAction::CursorEnd),
        KeyCode::Up | KeyCode::PageUp => AppEvent::Input(InputAction::ScrollUp),
        KeyCode::Down | KeyCode::PageDown => AppEvent::Input(InputAction::ScrollDown),
        KeyCode::Char(ch) if !ctrl => AppEvent::Input(InputAction::InsertChar(ch)),
        _ => return None,
    };

    Some(event)
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}
