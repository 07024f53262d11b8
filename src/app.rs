use anyhow::Result;

use crate::{
    cli::{Cli, Command, PrintScreen},
    domain, infra, ui,
    usecases::{self, bootstrap, contracts::ListScreen},
};

pub fn run(cli: Cli) -> Result<()> {
    let (context, _log_guard) = bootstrap::bootstrap(cli.config.as_deref())?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match cli.command_or_default() {
        Command::Run => {
            let mut shell = bootstrap::compose_shell(&context);
            let mut events = ui::CrosstermEventSource;
            ui::shell::start(&context, &mut events, &mut shell)?;
        }
        Command::Print { screen, width } => {
            let mut screen: Box<dyn ListScreen> = match screen {
                PrintScreen::Settings => Box::new(bootstrap::settings_screen(&context.config)),
                PrintScreen::Chats => Box::new(bootstrap::travel_talk_screen(&context.config)),
            };

            for line in print_lines(screen.as_mut(), usize::from(width))? {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn print_lines(screen: &mut dyn ListScreen, width: usize) -> Result<Vec<String>> {
    let receipt = screen.reload()?;
    tracing::info!(
        title = screen.title(),
        sections = receipt.sections,
        items = receipt.items,
        placeholders = receipt.placeholders,
        "printing screen"
    );

    Ok(ui::view::screen_text(screen, width))
}
