mod app_config;
mod file_config;
mod loader;

pub use app_config::{
    AppConfig, ChatRoomConfig, LogConfig, SettingItemConfig, SettingsSectionConfig, StartScreen,
    UiConfig,
};
pub use loader::load;
