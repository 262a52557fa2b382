//! Log setup.
//!
//! The terminal belongs to the UI, so events go to a file through a
//! non-blocking writer. `RUST_LOG` overrides the default `dwsim=info` filter.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Keeps the log writer alive; drop it last so buffered lines are flushed.
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

pub fn default_log_file() -> PathBuf {
    std::env::temp_dir().join("dwsim").join("dwsim.log")
}

/// Install the global subscriber writing to `log_file`.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
pub fn init(log_file: &Path) -> Result<LoggingGuard> {
    let dir = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log dir {}", dir.display()))?;
    let file_name = log_file
        .file_name()
        .map_or_else(|| "dwsim.log".into(), ToOwned::to_owned);

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dwsim=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_file = %log_file.display(), "tracing initialized");

    Ok(LoggingGuard { _guard: guard })
}
