use std::{collections::HashSet, fmt::Display, hash::Hash};

use thiserror::Error;

/// Something that can be shown as a row: it carries an identifier that stays
/// the same across rebuilds regardless of its position or content.
pub trait ListItem {
    type Id: Clone + Eq + Hash + Display;

    fn item_id(&self) -> Self::Id;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("section `{key}` is already registered")]
pub struct DuplicateSectionError {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<K, I> {
    key: K,
    items: Vec<I>,
}

impl<K, I> Section<K, I> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn items(&self) -> &[I] {
        &self.items
    }
}

/// Ordered sections, each holding ordered items. Built fresh for every
/// render and handed over by value; there are no edit operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionedListModel<K, I> {
    sections: Vec<Section<K, I>>,
}

impl<K, I> Default for SectionedListModel<K, I> {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
        }
    }
}

impl<K, I> SectionedListModel<K, I>
where
    K: Clone + Eq + Hash + Display,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a model from an explicit (key, items) list, stopping at the
    /// first repeated key.
    pub fn from_sections<S>(sections: S) -> Result<Self, DuplicateSectionError>
    where
        S: IntoIterator<Item = (K, Vec<I>)>,
    {
        let mut model = Self::new();
        for (key, items) in sections {
            model.add_section(key, items)?;
        }
        Ok(model)
    }

    pub fn add_section(&mut self, key: K, items: Vec<I>) -> Result<(), DuplicateSectionError> {
        if self.section(&key).is_some() {
            return Err(DuplicateSectionError {
                key: key.to_string(),
            });
        }

        self.sections.push(Section { key, items });
        Ok(())
    }

    pub fn sections(&self) -> &[Section<K, I>] {
        &self.sections
    }

    pub fn section(&self, key: &K) -> Option<&Section<K, I>> {
        self.sections.iter().find(|section| &section.key == key)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|section| section.items.len()).sum()
    }

    /// Re-checks key uniqueness over the section list itself.
    pub fn validate(&self) -> Result<(), DuplicateSectionError> {
        let mut seen = HashSet::with_capacity(self.sections.len());
        for section in &self.sections {
            if !seen.insert(&section.key) {
                return Err(DuplicateSectionError {
                    key: section.key.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row {
        id: u32,
        label: &'static str,
    }

    impl ListItem for Row {
        type Id = u32;

        fn item_id(&self) -> u32 {
            self.id
        }
    }

    fn row(id: u32, label: &'static str) -> Row {
        Row { id, label }
    }

    #[test]
    fn sections_keep_insertion_order() {
        let mut model = SectionedListModel::new();
        model.add_section("b", vec![row(1, "one")]).expect("b");
        model.add_section("a", vec![row(2, "two")]).expect("a");
        model.add_section("c", vec![]).expect("c");

        let keys: Vec<_> = model.sections().iter().map(|s| *s.key()).collect();

        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(model.len(), 3);
    }

    #[test]
    fn duplicate_key_is_rejected_and_existing_items_survive() {
        let mut model = SectionedListModel::new();
        model
            .add_section("general", vec![row(1, "notices"), row(2, "lab")])
            .expect("first insert");

        let err = model
            .add_section("general", vec![row(9, "other")])
            .expect_err("duplicate must fail");

        assert_eq!(err.key, "general");
        assert_eq!(model.len(), 1);
        let section = model.section(&"general").expect("section kept");
        assert_eq!(section.items(), &[row(1, "notices"), row(2, "lab")]);
    }

    #[test]
    fn from_sections_stops_at_first_duplicate() {
        let err = SectionedListModel::from_sections(vec![
            (1_i64, vec![row(1, "a")]),
            (2, vec![row(2, "b")]),
            (1, vec![row(3, "c")]),
        ])
        .expect_err("duplicate must fail");

        assert_eq!(err.to_string(), "section `1` is already registered");
    }

    #[test]
    fn item_count_sums_all_sections() {
        let model = SectionedListModel::from_sections(vec![
            ("x", vec![row(1, "a"), row(2, "b")]),
            ("y", vec![row(1, "a")]),
        ])
        .expect("model");

        assert_eq!(model.item_count(), 3);
        assert!(!model.is_empty());
    }

    #[test]
    fn empty_model_has_no_sections() {
        let model: SectionedListModel<String, Row> = SectionedListModel::new();

        assert!(model.is_empty());
        assert_eq!(model.item_count(), 0);
        assert!(model.validate().is_ok());
    }

    #[test]
    fn validate_reports_duplicates_not_added_through_add_section() {
        let model = SectionedListModel {
            sections: vec![
                Section {
                    key: "기타",
                    items: vec![row(1, "help")],
                },
                Section {
                    key: "기타",
                    items: vec![row(2, "logout")],
                },
            ],
        };

        let err = model.validate().expect_err("duplicate must be reported");

        assert_eq!(err.key, "기타");
    }

    #[test]
    fn same_item_id_may_repeat_across_sections() {
        let model = SectionedListModel::from_sections(vec![
            ("x", vec![row(7, "a")]),
            ("y", vec![row(7, "a")]),
        ])
        .expect("ids only need to be unique within a section");

        assert_eq!(model.item_count(), 2);
        assert_eq!(model.sections()[1].items()[0].label, "a");
    }
}
