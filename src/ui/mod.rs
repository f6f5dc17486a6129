//! UI layer: terminal rendering and interaction entry points.

mod event_source;
mod message_rendering;
pub mod shell;
mod styles;
mod terminal;
mod view;

pub use event_source::CrosstermEventSource;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
