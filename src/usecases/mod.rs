//! Use case layer: application workflows and orchestration.

pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod reset_identity;
pub mod resolve_identity;
pub mod send_message;
pub mod shell;
pub mod subscribe_feed;
pub mod toggle_theme;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
