use std::{collections::VecDeque, fmt::Display, hash::Hash};

use thiserror::Error;

use crate::domain::{
    section_model::{DuplicateSectionError, ListItem, SectionedListModel},
    snapshot::{RenderedRow, RenderedSection, RenderedSnapshot},
};

use super::contracts::{CellFormatter, DisplaySurface, SurfaceError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error(transparent)]
    DuplicateSection(#[from] DuplicateSectionError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// A queued apply failed. `applied` holds the receipts of the models that
/// reached the surface before it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("queued snapshot {} failed to apply: {source}", .applied.len() + 1)]
pub struct FlushError {
    pub applied: Vec<ApplyReceipt>,
    #[source]
    pub source: ApplyError,
}

/// Completion signal of an apply: what the surface now shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyReceipt {
    pub sequence: u64,
    pub sections: usize,
    pub items: usize,
    pub placeholders: usize,
}

/// Replaces the whole visible state of a surface with the contents of a
/// model. Applies are synchronous and never partial: either every section
/// and row reaches the surface or the surface is left untouched.
pub struct ListSnapshotApplier<K, I, S, F> {
    surface: S,
    formatter: F,
    pending: VecDeque<SectionedListModel<K, I>>,
    applied: u64,
}

impl<K, I, S, F> ListSnapshotApplier<K, I, S, F>
where
    K: Clone + Eq + Hash + Display,
    I: ListItem,
    S: DisplaySurface,
    F: CellFormatter<I>,
{
    pub fn new(surface: S, formatter: F) -> Self {
        Self {
            surface,
            formatter,
            pending: VecDeque::new(),
            applied: 0,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Models built through `add_section` never carry duplicate keys; the
    /// check is repeated here so nothing unvalidated reaches the surface.
    pub fn apply(&mut self, model: SectionedListModel<K, I>) -> Result<ApplyReceipt, ApplyError> {
        model.validate()?;

        let snapshot = self.render(&model);
        let receipt = ApplyReceipt {
            sequence: self.applied + 1,
            sections: snapshot.sections.len(),
            items: snapshot.item_count(),
            placeholders: snapshot.placeholder_count(),
        };

        self.surface.replace(snapshot)?;
        self.applied = receipt.sequence;

        tracing::debug!(
            sequence = receipt.sequence,
            sections = receipt.sections,
            items = receipt.items,
            placeholders = receipt.placeholders,
            "snapshot applied"
        );

        Ok(receipt)
    }

    /// Queues a model; queued models are applied by `flush` in submission
    /// order.
    pub fn submit(&mut self, model: SectionedListModel<K, I>) {
        self.pending.push_back(model);
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Applies queued models one at a time. Stops at the first failure: the
    /// failing model is dropped, later ones stay queued.
    pub fn flush(&mut self) -> Result<Vec<ApplyReceipt>, FlushError> {
        let mut receipts = Vec::with_capacity(self.pending.len());

        while let Some(model) = self.pending.pop_front() {
            match self.apply(model) {
                Ok(receipt) => receipts.push(receipt),
                Err(error) => {
                    tracing::warn!(
                        error = %error,
                        remaining = self.pending.len(),
                        "queued snapshot failed to apply"
                    );
                    return Err(FlushError {
                        applied: receipts,
                        source: error,
                    });
                }
            }
        }

        Ok(receipts)
    }

    fn render(&self, model: &SectionedListModel<K, I>) -> RenderedSnapshot {
        let sections = model
            .sections()
            .iter()
            .map(|section| RenderedSection {
                key: section.key().to_string(),
                rows: section
                    .items()
                    .iter()
                    .map(|item| self.render_row(section.key(), item))
                    .collect(),
            })
            .collect();

        RenderedSnapshot { sections }
    }

    fn render_row(&self, section: &K, item: &I) -> RenderedRow {
        let id = item.item_id().to_string();

        match self.formatter.format(item) {
            Ok(cell) => RenderedRow {
                id,
                cell,
                placeholder: false,
            },
            Err(error) => {
                tracing::warn!(
                    section = %section,
                    item_id = %id,
                    error = %error,
                    "row formatted with placeholder"
                );
                RenderedRow {
                    id,
                    cell: self.formatter.placeholder(item),
                    placeholder: true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::snapshot::CellContent, usecases::contracts::MissingDisplayDataError,
    };

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Entry {
        id: u32,
        label: Option<&'static str>,
    }

    impl ListItem for Entry {
        type Id = u32;

        fn item_id(&self) -> u32 {
            self.id
        }
    }

    fn entry(id: u32, label: &'static str) -> Entry {
        Entry {
            id,
            label: Some(label),
        }
    }

    struct LabelFormatter;

    impl CellFormatter<Entry> for LabelFormatter {
        fn format(&self, item: &Entry) -> Result<CellContent, MissingDisplayDataError> {
            item.label
                .map(CellContent::titled)
                .ok_or_else(|| MissingDisplayDataError {
                    item_id: item.id.to_string(),
                    field: "label",
                })
        }

        fn placeholder(&self, _item: &Entry) -> CellContent {
            CellContent::titled("(unnamed)")
        }
    }

    #[derive(Default)]
    struct RecordingSurface {
        visible: RenderedSnapshot,
        replace_calls: usize,
        reject: bool,
        reject_call: Option<usize>,
    }

    impl DisplaySurface for RecordingSurface {
        fn replace(&mut self, snapshot: RenderedSnapshot) -> Result<(), SurfaceError> {
            self.replace_calls += 1;
            if self.reject || self.reject_call == Some(self.replace_calls) {
                return Err(SurfaceError {
                    reason: "rejected".to_owned(),
                });
            }
            self.visible = snapshot;
            Ok(())
        }

        fn visible(&self) -> &RenderedSnapshot {
            &self.visible
        }
    }

    fn applier() -> ListSnapshotApplier<&'static str, Entry, RecordingSurface, LabelFormatter> {
        ListSnapshotApplier::new(RecordingSurface::default(), LabelFormatter)
    }

    fn model(
        sections: Vec<(&'static str, Vec<Entry>)>,
    ) -> SectionedListModel<&'static str, Entry> {
        SectionedListModel::from_sections(sections).expect("model must build")
    }

    #[test]
    fn visible_state_matches_model_after_apply() {
        let mut applier = applier();

        let receipt = applier
            .apply(model(vec![
                ("first", vec![entry(1, "a"), entry(2, "b")]),
                ("second", vec![entry(3, "c")]),
            ]))
            .expect("apply must succeed");

        let visible = applier.surface().visible();
        assert_eq!(visible.section_keys(), vec!["first", "second"]);
        let ids: Vec<_> = visible.rows().map(|(_, row)| row.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(receipt.sections, 2);
        assert_eq!(receipt.items, 3);
        assert_eq!(receipt.sequence, 1);
    }

    #[test]
    fn empty_model_clears_visible_state() {
        let mut applier = applier();
        applier
            .apply(model(vec![("first", vec![entry(1, "a")])]))
            .expect("first apply");

        let receipt = applier
            .apply(SectionedListModel::new())
            .expect("empty model is not an error");

        assert!(applier.surface().visible().is_empty());
        assert_eq!(receipt.items, 0);
    }

    #[test]
    fn missing_data_yields_placeholder_row_instead_of_dropping_it() {
        let mut applier = applier();

        let receipt = applier
            .apply(model(vec![(
                "only",
                vec![entry(1, "a"), Entry { id: 2, label: None }],
            )]))
            .expect("apply must succeed");

        let visible = applier.surface().visible();
        assert_eq!(visible.item_count(), 2);
        let (_, row) = visible.row_at(1).expect("second row");
        assert!(row.placeholder);
        assert_eq!(row.cell.title, "(unnamed)");
        assert_eq!(receipt.placeholders, 1);
    }

    #[test]
    fn surface_failure_keeps_previous_state_and_sequence() {
        let mut applier = applier();
        applier
            .apply(model(vec![("first", vec![entry(1, "a")])]))
            .expect("first apply");
        applier.surface_mut().reject = true;

        let err = applier
            .apply(model(vec![("second", vec![entry(2, "b")])]))
            .expect_err("surface rejects");

        assert!(matches!(err, ApplyError::Surface(_)));
        assert_eq!(applier.surface().visible().section_keys(), vec!["first"]);

        applier.surface_mut().reject = false;
        let receipt = applier
            .apply(model(vec![("third", vec![])]))
            .expect("apply after failure");
        assert_eq!(receipt.sequence, 2);
    }

    #[test]
    fn flush_applies_queued_models_in_submission_order() {
        let mut applier = applier();
        applier.submit(model(vec![("one", vec![entry(1, "a")])]));
        applier.submit(model(vec![("two", vec![entry(2, "b")])]));
        applier.submit(model(vec![("three", vec![entry(3, "c")])]));

        let receipts = applier.flush().expect("flush must succeed");

        let sequences: Vec<_> = receipts.iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3]);
        assert_eq!(applier.surface().visible().section_keys(), vec!["three"]);
        assert_eq!(applier.surface().replace_calls, 3);
        assert_eq!(applier.pending_len(), 0);
    }

    #[test]
    fn flush_stops_at_first_failure_and_keeps_the_rest_queued() {
        let mut applier = applier();
        applier.surface_mut().reject = true;
        applier.submit(model(vec![("one", vec![])]));
        applier.submit(model(vec![("two", vec![])]));

        let err = applier.flush().expect_err("first apply fails");

        assert!(matches!(err.source, ApplyError::Surface(_)));
        assert!(err.applied.is_empty());
        assert_eq!(applier.pending_len(), 1);
        assert_eq!(applier.surface().replace_calls, 1);
    }

    #[test]
    fn flush_failure_returns_receipts_of_models_already_applied() {
        let mut applier = applier();
        applier.surface_mut().reject_call = Some(3);
        for key in ["one", "two", "three", "four"] {
            applier.submit(model(vec![(key, vec![entry(1, "a")])]));
        }

        let err = applier.flush().expect_err("third apply fails");

        let sequences: Vec<_> = err.applied.iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![1, 2]);
        assert!(matches!(err.source, ApplyError::Surface(_)));
        assert_eq!(applier.surface().visible().section_keys(), vec!["two"]);
        assert_eq!(applier.pending_len(), 1);

        applier.surface_mut().reject_call = None;
        let receipts = applier.flush().expect("remaining model applies");
        assert_eq!(receipts[0].sequence, 3);
        assert_eq!(applier.surface().visible().section_keys(), vec!["four"]);
    }
}
