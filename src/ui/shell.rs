use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, ShellOrchestrator},
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        start_screen = orchestrator.state().active_screen().as_label(),
        "starting TUI shell"
    );

    let mut terminal = TerminalSession::new()?;
    run_loop(event_source, orchestrator, |shell| {
        terminal.draw(|frame| view::render(frame, shell))
    })?;

    tracing::info!("TUI shell stopped");
    Ok(())
}

fn run_loop<D>(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
    mut draw: D,
) -> Result<()>
where
    D: FnMut(&dyn ShellOrchestrator) -> Result<()>,
{
    while orchestrator.state().is_running() {
        draw(&*orchestrator)?;

        match event_source.next_event()? {
            Some(event) => orchestrator.handle_event(event)?,
            None if event_source.is_exhausted() => break,
            None => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            events::{AppEvent, KeyInput},
            shell_state::ScreenId,
        },
        ui::event_source::MockEventSource,
        usecases::{
            settings_screen::{default_settings_catalog, SettingsScreen},
            shell::DefaultShellOrchestrator,
            travel_talk_screen::{mock_chat_rooms, TravelTalkScreen},
        },
    };

    fn orchestrator() -> DefaultShellOrchestrator {
        DefaultShellOrchestrator::new(
            SettingsScreen::new(default_settings_catalog()),
            TravelTalkScreen::new(mock_chat_rooms()),
            ScreenId::Settings,
        )
    }

    #[test]
    fn mock_source_produces_quit_event() {
        let mut source = MockEventSource::from(vec![AppEvent::QuitRequested]);
        let event = source.next_event().expect("must read mock event");

        assert_eq!(event, Some(AppEvent::QuitRequested));
    }

    #[test]
    fn loop_draws_once_per_event_until_quit() {
        let mut source = MockEventSource::from(vec![
            AppEvent::InputKey(KeyInput::Tab),
            AppEvent::Tick,
            AppEvent::QuitRequested,
        ]);
        let mut orchestrator = orchestrator();
        let mut drawn_titles = Vec::new();

        run_loop(&mut source, &mut orchestrator, |shell| {
            drawn_titles.push(shell.screen().title().to_owned());
            Ok(())
        })
        .expect("loop must finish");

        assert_eq!(drawn_titles, vec!["설정", "Travel Talk", "Travel Talk"]);
        assert!(!orchestrator.state().is_running());
    }

    #[test]
    fn loop_ends_when_source_runs_dry() {
        let mut source = MockEventSource::from(vec![AppEvent::Tick]);
        let mut orchestrator = orchestrator();
        let mut draws = 0;

        run_loop(&mut source, &mut orchestrator, |_| {
            draws += 1;
            Ok(())
        })
        .expect("loop must finish");

        assert_eq!(draws, 2);
        assert!(orchestrator.state().is_running());
    }
}
