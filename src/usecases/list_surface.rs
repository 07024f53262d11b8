use crate::domain::snapshot::{ListLayout, RenderedRow, RenderedSnapshot, SnapshotChanges};

use super::contracts::{DisplaySurface, SurfaceError};

/// In-memory display surface backing a terminal list. Keeps the last
/// applied snapshot, the changes that led to it and a row selection that
/// follows item identity across replacements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSurface {
    layout: ListLayout,
    visible: RenderedSnapshot,
    last_changes: SnapshotChanges,
    selected_index: Option<usize>,
}

impl ListSurface {
    pub fn new(layout: ListLayout) -> Self {
        Self {
            layout,
            visible: RenderedSnapshot::default(),
            last_changes: SnapshotChanges::default(),
            selected_index: None,
        }
    }

    pub fn layout(&self) -> ListLayout {
        self.layout
    }

    pub fn last_changes(&self) -> &SnapshotChanges {
        &self.last_changes
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected_row(&self) -> Option<(&str, &RenderedRow)> {
        self.selected_index
            .and_then(|index| self.visible.row_at(index))
    }

    pub fn select_next(&mut self) {
        let Some(index) = self.selected_index else {
            return;
        };

        let last_index = self.visible.item_count().saturating_sub(1);
        self.selected_index = Some(std::cmp::min(index.saturating_add(1), last_index));
    }

    pub fn select_previous(&mut self) {
        let Some(index) = self.selected_index else {
            return;
        };

        self.selected_index = Some(index.saturating_sub(1));
    }
}

impl DisplaySurface for ListSurface {
    fn replace(&mut self, snapshot: RenderedSnapshot) -> Result<(), SurfaceError> {
        let previous_selection = self
            .selected_row()
            .map(|(key, row)| (key.to_owned(), row.id.clone()));

        self.last_changes = SnapshotChanges::between(&self.visible, &snapshot);
        self.selected_index = resolve_selection_index(&snapshot, previous_selection);
        self.visible = snapshot;

        tracing::debug!(
            inserted_sections = self.last_changes.inserted_sections.len(),
            removed_sections = self.last_changes.removed_sections.len(),
            inserted_items = self.last_changes.inserted_items,
            removed_items = self.last_changes.removed_items,
            moved_items = self.last_changes.moved_items,
            reloaded_items = self.last_changes.reloaded_items,
            "list surface updated"
        );

        Ok(())
    }

    fn visible(&self) -> &RenderedSnapshot {
        &self.visible
    }
}

fn resolve_selection_index(
    snapshot: &RenderedSnapshot,
    previous: Option<(String, String)>,
) -> Option<usize> {
    if snapshot.item_count() == 0 {
        return None;
    }

    previous
        .and_then(|(section, id)| {
            snapshot
                .rows()
                .position(|(key, row)| key == section && row.id == id)
        })
        .or(Some(0))
}
