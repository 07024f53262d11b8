use crate::domain::{
    section_model::{DuplicateSectionError, SectionedListModel},
    setting::{SettingItem, SettingsSection},
    snapshot::{CellContent, ListLayout},
};

use super::{
    contracts::{CellFormatter, ListScreen, MissingDisplayDataError},
    list_surface::ListSurface,
    snapshot_applier::{ApplyError, ApplyReceipt, ListSnapshotApplier},
};

pub const SETTINGS_TITLE: &str = "설정";

const UNTITLED_SETTING: &str = "(untitled)";

pub fn default_settings_catalog() -> Vec<SettingsSection> {
    vec![
        SettingsSection::new(
            "전체 설정",
            vec![
                SettingItem::new(1, "공지사항"),
                SettingItem::new(2, "실험실"),
                SettingItem::new(3, "버전 정보"),
            ],
        ),
        SettingsSection::new(
            "개인 설정",
            vec![
                SettingItem::new(4, "개인/보안"),
                SettingItem::new(5, "알림"),
                SettingItem::new(6, "채팅"),
                SettingItem::new(7, "멀티프로필"),
            ],
        ),
        SettingsSection::new("기타", vec![SettingItem::new(8, "고객센터/도움말")]),
    ]
}

pub fn build_settings_model(
    catalog: &[SettingsSection],
) -> Result<SectionedListModel<String, SettingItem>, DuplicateSectionError> {
    SectionedListModel::from_sections(
        catalog
            .iter()
            .map(|section| (section.key.clone(), section.items.clone())),
    )
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SettingCellFormatter;

impl CellFormatter<SettingItem> for SettingCellFormatter {
    fn format(&self, item: &SettingItem) -> Result<CellContent, MissingDisplayDataError> {
        if item.name.trim().is_empty() {
            return Err(MissingDisplayDataError {
                item_id: item.id.to_string(),
                field: "name",
            });
        }

        Ok(CellContent::titled(item.name.clone()))
    }

    fn placeholder(&self, _item: &SettingItem) -> CellContent {
        CellContent::titled(UNTITLED_SETTING)
    }
}

pub struct SettingsScreen {
    catalog: Vec<SettingsSection>,
    applier: ListSnapshotApplier<String, SettingItem, ListSurface, SettingCellFormatter>,
}

impl SettingsScreen {
    pub fn new(catalog: Vec<SettingsSection>) -> Self {
        Self {
            catalog,
            applier: ListSnapshotApplier::new(
                ListSurface::new(ListLayout::grouped()),
                SettingCellFormatter,
            ),
        }
    }
}

impl ListScreen for SettingsScreen {
    fn title(&self) -> &str {
        SETTINGS_TITLE
    }

    fn surface(&self) -> &ListSurface {
        self.applier.surface()
    }

    fn surface_mut(&mut self) -> &mut ListSurface {
        self.applier.surface_mut()
    }

    fn reload(&mut self) -> Result<ApplyReceipt, ApplyError> {
        let model = build_settings_model(&self.catalog)?;
        self.applier.apply(model)
    }
}
