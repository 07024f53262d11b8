use anyhow::Result;

use crate::domain::{
    events::{AppEvent, KeyInput},
    shell_state::{ScreenId, ShellState},
};

use super::{
    contracts::{ListScreen, ShellOrchestrator},
    settings_screen::SettingsScreen,
    travel_talk_screen::TravelTalkScreen,
};

pub struct DefaultShellOrchestrator {
    state: ShellState,
    settings: SettingsScreen,
    travel_talk: TravelTalkScreen,
}

impl DefaultShellOrchestrator {
    /// Applies the initial snapshot of both screens. A screen that fails to
    /// apply stays empty and the failure is shown in the status line.
    pub fn new(settings: SettingsScreen, travel_talk: TravelTalkScreen, start: ScreenId) -> Self {
        let mut orchestrator = Self {
            state: ShellState::starting_on(start),
            settings,
            travel_talk,
        };

        for screen in [ScreenId::Settings, ScreenId::TravelTalk] {
            orchestrator.reload(screen);
        }

        orchestrator
    }

    fn screen_mut(&mut self, id: ScreenId) -> &mut dyn ListScreen {
        match id {
            ScreenId::Settings => &mut self.settings,
            ScreenId::TravelTalk => &mut self.travel_talk,
        }
    }

    fn reload(&mut self, id: ScreenId) -> bool {
        match self.screen_mut(id).reload() {
            Ok(receipt) => {
                tracing::info!(
                    screen = id.as_label(),
                    sections = receipt.sections,
                    items = receipt.items,
                    placeholders = receipt.placeholders,
                    "screen reloaded"
                );
                true
            }
            Err(error) => {
                tracing::error!(screen = id.as_label(), error = %error, "screen reload failed");
                self.state
                    .set_notice(format!("{} failed to load: {error}", id.as_label()));
                false
            }
        }
    }
}

impl ShellOrchestrator for DefaultShellOrchestrator {
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn screen(&self) -> &dyn ListScreen {
        match self.state.active_screen() {
            ScreenId::Settings => &self.settings,
            ScreenId::TravelTalk => &self.travel_talk,
        }
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        let active = self.state.active_screen();

        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => match key {
                KeyInput::Tab | KeyInput::BackTab => self.state.show_screen(active.toggled()),
                KeyInput::Char('1') => self.state.show_screen(ScreenId::Settings),
                KeyInput::Char('2') => self.state.show_screen(ScreenId::TravelTalk),
                KeyInput::Char('j') | KeyInput::Down => {
                    self.screen_mut(active).surface_mut().select_next()
                }
                KeyInput::Char('k') | KeyInput::Up => {
                    self.screen_mut(active).surface_mut().select_previous()
                }
                KeyInput::Char('r') => {
                    if self.reload(active) {
                        self.state.clear_notice();
                    }
                }
                KeyInput::Char(_) => {}
            },
        }

        Ok(())
    }
}
