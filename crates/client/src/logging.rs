//! Logging setup for the arena binary.
//!
//! Stdout carries the battle transcript, so log records go to a file only.
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// File name written inside the log directory.
pub const LOG_FILE_NAME: &str = "arena.log";

/// Get the platform-specific log directory for the arena.
///
/// - macOS: `~/Library/Caches/arena/logs`
/// - Linux: `~/.cache/arena/logs` (or `$XDG_CACHE_HOME/arena/logs`)
/// - Windows: `%LOCALAPPDATA%\arena\cache\logs`
/// - Fallback: `/tmp/arena/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "arena")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/arena"))
        .join("logs")
}

/// Build the log filter from a `RUST_LOG`-style directive string.
///
/// `info` applies only when `directives` is absent, empty or entirely
/// invalid; any valid directive (including `off`) wins.
pub fn build_env_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Install the global subscriber writing to `<log_dir>/arena.log`.
///
/// The returned guard flushes the non-blocking writer on drop and must be
/// held until the program exits.
pub fn setup_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = build_env_filter(rust_log.as_deref());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: {}", log_dir.join(LOG_FILE_NAME).display());

    Ok(guard)
}

/// Like [`setup_logging`], but a failure only disables logging.
///
/// Writes a single warning to `warn` and returns `None` so the caller can
/// carry on without a subscriber.
pub fn setup_logging_or_warn(log_dir: &Path, warn: &mut impl Write) -> Option<WorkerGuard> {
    match setup_logging(log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            let _ = writeln!(warn, "warning: logging disabled: {e:#}");
            None
        }
    }
}
