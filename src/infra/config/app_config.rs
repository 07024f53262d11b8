use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{
    chat::ChatRoom,
    message::Message,
    setting::{SettingItem, SettingsSection},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub ui: UiConfig,
    pub settings: SettingsConfig,
    pub travel_talk: TravelTalkConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// Directory for `travel-talk.log`; the user cache dir when unset.
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StartScreen {
    #[default]
    Settings,
    Chats,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UiConfig {
    pub start_screen: StartScreen,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingItemConfig {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingsSectionConfig {
    pub key: String,
    #[serde(default)]
    pub items: Vec<SettingItemConfig>,
}

/// Replaces the built-in settings catalog when `sections` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SettingsConfig {
    pub sections: Option<Vec<SettingsSectionConfig>>,
}

impl SettingsConfig {
    pub fn catalog(&self) -> Option<Vec<SettingsSection>> {
        self.sections.as_ref().map(|sections| {
            sections
                .iter()
                .map(|section| {
                    SettingsSection::new(
                        section.key.clone(),
                        section
                            .items
                            .iter()
                            .map(|item| SettingItem::new(item.id, item.name.clone()))
                            .collect(),
                    )
                })
                .collect()
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageConfig {
    pub sender: String,
    pub date: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRoomConfig {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub messages: Vec<MessageConfig>,
}

/// Replaces the built-in mock chat rooms when `rooms` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TravelTalkConfig {
    pub rooms: Option<Vec<ChatRoomConfig>>,
}

impl TravelTalkConfig {
    pub fn chat_rooms(&self) -> Option<Vec<ChatRoom>> {
        self.rooms.as_ref().map(|rooms| {
            rooms
                .iter()
                .map(|room| {
                    ChatRoom::new(room.id, room.name.clone())
                        .with_images(room.images.iter().cloned())
                        .with_messages(
                            room.messages
                                .iter()
                                .map(|m| Message::new(&m.sender, &m.date, &m.text))
                                .collect(),
                        )
                })
                .collect()
        })
    }
}
