//! Domain layer: core entities and business rules.

pub mod events;
pub mod feed_state;
pub mod identity;
pub mod input_state;
pub mod message;
pub mod session_state;
pub mod theme;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
