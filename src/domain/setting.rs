use super::section_model::ListItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingItem {
    pub id: u32,
    pub name: String,
}

impl SettingItem {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl ListItem for SettingItem {
    type Id = u32;

    fn item_id(&self) -> u32 {
        self.id
    }
}

/// One group of the settings screen, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsSection {
    pub key: String,
    pub items: Vec<SettingItem>,
}

impl SettingsSection {
    pub fn new(key: impl Into<String>, items: Vec<SettingItem>) -> Self {
        Self {
            key: key.into(),
            items,
        }
    }
}
