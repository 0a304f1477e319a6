//! Tracing setup
//!
//! The terminal belongs to the TUI while it runs, so log output goes to a
//! daily rolling file under the user's local data directory.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Keeps the background log writer alive; drop it to flush
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// Directory log files are written to
///
/// Falls back to the temp directory when no data directory is known or it
/// cannot be created.
#[must_use]
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("splitview").join("logs"))
        .filter(|dir| std::fs::create_dir_all(dir).is_ok())
        .unwrap_or_else(|| std::env::temp_dir().join("splitview").join("logs"))
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `default_filter`. Returns `None` if a
/// subscriber is already installed or the log directory is unusable.
pub fn init(default_filter: &str) -> Option<LoggingGuard> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir).ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "splitview.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard { _guard: guard })
}
