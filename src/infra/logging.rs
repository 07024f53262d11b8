use std::{fs, path::PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

const LOG_FILE_NAME: &str = "travel-talk.log";

/// Routes logs to a file, since the terminal belongs to the TUI. The
/// returned guard flushes pending lines when dropped.
pub fn init(config: &LogConfig) -> Result<WorkerGuard, AppError> {
    let directory = log_directory(config);
    fs::create_dir_all(&directory).map_err(|source| AppError::LogDirectory {
        path: directory.clone(),
        source,
    })?;

    let appender = tracing_appender::rolling::never(&directory, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(guard)
}

fn log_directory(config: &LogConfig) -> PathBuf {
    config.directory.clone().unwrap_or_else(|| {
        dirs::cache_dir()
            .map(|dir| dir.join("travel-talk"))
            .unwrap_or_else(|| PathBuf::from("."))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_directory_wins() {
        let config = LogConfig {
            level: "debug".to_owned(),
            directory: Some(PathBuf::from("/tmp/travel-talk-logs")),
        };

        assert_eq!(log_directory(&config), PathBuf::from("/tmp/travel-talk-logs"));
    }

    #[test]
    fn default_directory_is_namespaced() {
        let directory = log_directory(&LogConfig::default());

        assert!(directory.ends_with("travel-talk") || directory == PathBuf::from("."));
    }
}
