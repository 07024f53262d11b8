use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "travel-talk",
    about = "Settings and Travel Talk chat list in the terminal"
)]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start TUI shell
    Run,
    /// Apply one screen and print its rows as plain text
    Print {
        #[arg(value_enum)]
        screen: PrintScreen,

        /// Line width used for truncation
        #[arg(short, long, default_value_t = 60)]
        width: u16,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrintScreen {
    Settings,
    Chats,
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command, PrintScreen};

    #[test]
    fn defaults_to_run_when_command_is_missing() {
        let cli = Cli::parse_from(["travel-talk"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
    }

    #[test]
    fn parses_explicit_run_command() {
        let cli = Cli::parse_from(["travel-talk", "run", "--config", "custom.toml"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
        assert_eq!(
            cli.config
                .as_deref()
                .map(|p| p.to_string_lossy().to_string()),
            Some("custom.toml".to_owned())
        );
    }

    #[test]
    fn parses_print_command_with_width() {
        let cli = Cli::parse_from(["travel-talk", "print", "chats", "--width", "40"]);

        assert!(matches!(
            cli.command_or_default(),
            Command::Print {
                screen: PrintScreen::Chats,
                width: 40
            }
        ));
    }

    #[test]
    fn print_width_defaults_to_sixty() {
        let cli = Cli::parse_from(["travel-talk", "print", "settings"]);

        assert!(matches!(
            cli.command_or_default(),
            Command::Print {
                screen: PrintScreen::Settings,
                width: 60
            }
        ));
    }
}
