//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written under [`log_directory`] so stdout stays free
/// for NDJSON output. Log level is controlled by the `DSPICK_LOG`
/// environment variable.
///
/// # Examples
/// ```bash
/// DSPICK_LOG=debug dspick ./project
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "dspick.log");

    let env_filter = EnvFilter::try_from_env("DSPICK_LOG")
        .unwrap_or_else(|_| EnvFilter::new("dspick=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("dspick starting, log directory: {}", log_dir.display());

    Ok(())
}

/// Directory the daily `dspick.log.<date>` files are written to
pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dspick")
        .join("logs")
}
