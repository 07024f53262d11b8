use std::collections::HashMap;

/// Display representation of a single row, independent of the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellContent {
    pub title: String,
    pub subtitle: Option<String>,
    /// Secondary trailing text, rendered dimmed after the subtitle.
    pub detail: Option<String>,
    pub image: Option<String>,
}

impl CellContent {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_image(mut self, image: Option<impl Into<String>>) -> Self {
        self.image = image.map(Into::into);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListAppearance {
    /// Section headers are drawn above their rows.
    Grouped,
    #[default]
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListLayout {
    pub appearance: ListAppearance,
    pub show_separators: bool,
}

impl ListLayout {
    pub fn grouped() -> Self {
        Self {
            appearance: ListAppearance::Grouped,
            show_separators: true,
        }
    }

    pub fn plain() -> Self {
        Self {
            appearance: ListAppearance::Plain,
            show_separators: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub id: String,
    pub cell: CellContent,
    /// Set when the formatter could not produce the row and a placeholder
    /// was shown instead.
    pub placeholder: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub key: String,
    pub rows: Vec<RenderedRow>,
}

/// Complete desired state of a list: what a display surface shows after an
/// apply.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedSnapshot {
    pub sections: Vec<RenderedSection>,
}

impl RenderedSnapshot {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section_keys(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.key.as_str()).collect()
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.rows.len()).sum()
    }

    pub fn placeholder_count(&self) -> usize {
        self.rows().filter(|(_, row)| row.placeholder).count()
    }

    /// All rows in display order together with their section key.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &RenderedRow)> {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter().map(move |row| (s.key.as_str(), row)))
    }

    pub fn row_at(&self, index: usize) -> Option<(&str, &RenderedRow)> {
        self.rows().nth(index)
    }
}

/// Structural changes between two snapshots. Items are identified by their
/// section key plus item id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SnapshotChanges {
    pub inserted_sections: Vec<String>,
    pub removed_sections: Vec<String>,
    pub moved_sections: usize,
    pub inserted_items: usize,
    pub removed_items: usize,
    pub moved_items: usize,
    pub reloaded_items: usize,
}

impl SnapshotChanges {
    pub fn between(old: &RenderedSnapshot, new: &RenderedSnapshot) -> Self {
        let old_keys = old.section_keys();
        let new_keys = new.section_keys();

        let inserted_sections = new_keys
            .iter()
            .filter(|key| !old_keys.contains(*key))
            .map(|key| (*key).to_owned())
            .collect();
        let removed_sections = old_keys
            .iter()
            .filter(|key| !new_keys.contains(*key))
            .map(|key| (*key).to_owned())
            .collect();
        let moved_sections = count_reordered(&old_keys, &new_keys);

        let old_rows: HashMap<(&str, &str), &RenderedRow> = old
            .rows()
            .map(|(key, row)| ((key, row.id.as_str()), row))
            .collect();
        let new_rows: HashMap<(&str, &str), &RenderedRow> = new
            .rows()
            .map(|(key, row)| ((key, row.id.as_str()), row))
            .collect();

        let inserted_items = new_rows.keys().filter(|id| !old_rows.contains_key(*id)).count();
        let removed_items = old_rows.keys().filter(|id| !new_rows.contains_key(*id)).count();
        let reloaded_items = new_rows
            .iter()
            .filter(|&(id, row)| old_rows.get(id).is_some_and(|old_row| *old_row != *row))
            .count();

        let old_order: Vec<(&str, &str)> = old.rows().map(|(k, r)| (k, r.id.as_str())).collect();
        let new_order: Vec<(&str, &str)> = new.rows().map(|(k, r)| (k, r.id.as_str())).collect();
        let moved_items = count_reordered(&old_order, &new_order);

        Self {
            inserted_sections,
            removed_sections,
            moved_sections,
            inserted_items,
            removed_items,
            moved_items,
            reloaded_items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Minimal number of entries common to both sequences that have to move so
/// the old order becomes the new one: everything outside their longest
/// common subsequence.
fn count_reordered<T: PartialEq>(old: &[T], new: &[T]) -> usize {
    let old_common: Vec<&T> = old.iter().filter(|value| new.contains(*value)).collect();
    let new_common: Vec<&T> = new.iter().filter(|value| old.contains(*value)).collect();

    old_common.len() - longest_common_subsequence(&old_common, &new_common)
}

fn longest_common_subsequence<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut previous = vec![0; b.len() + 1];
    let mut current = vec![0; b.len() + 1];

    for left in a {
        for (j, right) in b.iter().enumerate() {
            current[j + 1] = if left == right {
                previous[j] + 1
            } else {
                current[j].max(previous[j + 1])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}
