use anyhow::Result;
use thiserror::Error;

use crate::domain::{
    events::AppEvent,
    shell_state::ShellState,
    snapshot::{CellContent, RenderedSnapshot},
};

use super::{
    list_surface::ListSurface,
    snapshot_applier::{ApplyError, ApplyReceipt},
};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;

    /// True once the source can never produce another event.
    fn is_exhausted(&self) -> bool {
        false
    }
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    fn screen(&self) -> &dyn ListScreen;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}

/// A screen controller: builds a fresh model from its data on every reload
/// and applies it to its own surface.
pub trait ListScreen {
    fn title(&self) -> &str;
    fn surface(&self) -> &ListSurface;
    fn surface_mut(&mut self) -> &mut ListSurface;
    fn reload(&mut self) -> Result<ApplyReceipt, ApplyError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("item `{item_id}` has no {field} to display")]
pub struct MissingDisplayDataError {
    pub item_id: String,
    pub field: &'static str,
}

/// Maps an item to its row representation. Kept apart from the model so the
/// same model can be drawn in different styles.
pub trait CellFormatter<I> {
    fn format(&self, item: &I) -> Result<CellContent, MissingDisplayDataError>;

    /// Row shown when `format` fails for this item.
    fn placeholder(&self, item: &I) -> CellContent;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("display surface rejected snapshot: {reason}")]
pub struct SurfaceError {
    pub reason: String,
}

/// Receives complete snapshots and owns whatever diffing and drawing it
/// needs. A failed `replace` must leave the previous snapshot visible.
pub trait DisplaySurface {
    fn replace(&mut self, snapshot: RenderedSnapshot) -> Result<(), SurfaceError>;
    fn visible(&self) -> &RenderedSnapshot;
}
