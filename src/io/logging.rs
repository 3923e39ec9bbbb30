use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;

use crate::model::config::LogConfig;

/// Install a file-backed `tracing` subscriber.
///
/// Logs never go to stdout: the TUI owns the terminal and CLI output must stay
/// machine-readable. `RUST_LOG` overrides the configured level. The returned
/// guard must be held until exit so buffered lines are flushed. Returns
/// `None` if the log path is unusable or a subscriber is already installed.
pub fn init_logging(config: &LogConfig, data_dir: &Path) -> Option<WorkerGuard> {
    let default_path = data_dir.join("lb.log");
    let log_path = config.file.as_deref().map(Path::new).unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;
    std::fs::create_dir_all(log_dir).ok()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(guard)
}
