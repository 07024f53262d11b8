use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{
    AppConfig, ChatRoomConfig, LogConfig, SettingsSectionConfig, StartScreen, UiConfig,
};

/// On-disk shape: every field optional, merged over `AppConfig::default()`.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub ui: Option<FileUiConfig>,
    pub settings: Option<FileSettingsConfig>,
    pub travel_talk: Option<FileTravelTalkConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(ui) = self.ui {
            ui.merge_into(&mut config.ui);
        }

        if let Some(sections) = self.settings.and_then(|settings| settings.sections) {
            config.settings.sections = Some(sections);
        }

        if let Some(rooms) = self.travel_talk.and_then(|travel_talk| travel_talk.rooms) {
            config.travel_talk.rooms = Some(rooms);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub directory: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(directory) = self.directory {
            config.directory = Some(directory);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileUiConfig {
    pub start_screen: Option<StartScreen>,
}

impl FileUiConfig {
    fn merge_into(self, config: &mut UiConfig) {
        if let Some(start_screen) = self.start_screen {
            config.start_screen = start_screen;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileSettingsConfig {
    pub sections: Option<Vec<SettingsSectionConfig>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileTravelTalkConfig {
    pub rooms: Option<Vec<ChatRoomConfig>>,
}
