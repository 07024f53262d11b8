//! Use case layer: screen controllers, snapshot application and shell
//! orchestration.

pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod list_surface;
pub mod settings_screen;
pub mod shell;
pub mod snapshot_applier;
pub mod travel_talk_screen;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
