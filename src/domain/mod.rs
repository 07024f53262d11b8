//! Domain layer: list model, row values and shell state.

pub mod chat;
pub mod events;
pub mod message;
pub mod section_model;
pub mod setting;
pub mod shell_state;
pub mod snapshot;
pub mod timestamp;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
