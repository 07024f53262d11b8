use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;

use crate::{
    domain::shell_state::ScreenId,
    infra::{
        self,
        config::{AppConfig, StartScreen},
        error::AppError,
    },
    usecases::{
        context::AppContext,
        settings_screen::{default_settings_catalog, SettingsScreen},
        shell::DefaultShellOrchestrator,
        travel_talk_screen::{mock_chat_rooms, TravelTalkScreen},
    },
};

pub fn bootstrap(config_path: Option<&Path>) -> Result<(AppContext, WorkerGuard), AppError> {
    let context = build_context(config_path)?;
    let guard = infra::logging::init(&context.config.logging)?;

    Ok((context, guard))
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config = infra::config::load(config_path)?;

    Ok(AppContext::new(config))
}

pub fn compose_shell(context: &AppContext) -> DefaultShellOrchestrator {
    DefaultShellOrchestrator::new(
        settings_screen(&context.config),
        travel_talk_screen(&context.config),
        start_screen(context.config.ui.start_screen),
    )
}

pub fn settings_screen(config: &AppConfig) -> SettingsScreen {
    SettingsScreen::new(
        config
            .settings
            .catalog()
            .unwrap_or_else(default_settings_catalog),
    )
}

pub fn travel_talk_screen(config: &AppConfig) -> TravelTalkScreen {
    TravelTalkScreen::new(
        config
            .travel_talk
            .chat_rooms()
            .unwrap_or_else(mock_chat_rooms),
    )
}

fn start_screen(start: StartScreen) -> ScreenId {
    match start {
        StartScreen::Settings => ScreenId::Settings,
        StartScreen::Chats => ScreenId::TravelTalk,
    }
}
