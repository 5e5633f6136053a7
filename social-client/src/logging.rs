//! File-based logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LogConfig;

/// Initialize the logging system
///
/// Sets up:
/// - Daily log rotation for `social-client.log` under the configured directory
/// - Plain text or JSON lines in the file, per [`LogConfig::json`]
/// - Optional human-readable stdout layer
/// - Non-blocking writes so request tasks never wait on disk
///
/// The returned guard flushes buffered log lines when dropped; keep it alive
/// for the lifetime of the program.
///
/// Fails if the log directory cannot be created or a global subscriber is
/// already installed.
pub fn init(config: &LogConfig) -> Result<WorkerGuard, String> {
    fs::create_dir_all(&config.log_dir)
        .map_err(|e| format!("Failed to create log directory: {}", e))?;

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "social-client.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // RUST_LOG wins over the configured level
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("social_client=info,warn"));

    let file_layer = if config.json {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(non_blocking)
            .with_thread_ids(true)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(non_blocking)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .boxed()
    };

    let stdout_layer = config
        .stdout
        .then(|| fmt::layer().with_target(false).compact().boxed());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| format!("Failed to install subscriber: {}", e))?;

    tracing::info!(
        log_dir = %config.log_dir.display(),
        log_level = %config.log_level,
        stdout = config.stdout,
        json = config.json,
        "Logging initialized"
    );

    Ok(guard)
}
