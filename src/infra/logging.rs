use std::path::Path;

use tracing_appender::rolling;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

const LOG_FILE_NAME: &str = "rally.log";

/// Initializes the global subscriber writing to a file under `log_dir`.
/// The TUI owns the terminal, so nothing is ever logged to stdout/stderr.
pub fn init(config: &LogConfig, log_dir: &Path) -> Result<(), AppError> {
    let file_appender = rolling::never(log_dir, LOG_FILE_NAME);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(AppError::LoggingInit)
}
