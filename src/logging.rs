//! Logging Setup
//!
//! Console output plus a daily rolling file in the platform data directory.
//! `RUST_LOG` overrides the default level.

use crate::constants::LOG_FILE_PREFIX;
use crate::helpers::{get_or_create_log_dir, is_development};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global tracing subscriber
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process. `None` means only console logging is active.
pub fn init_logging() -> Option<WorkerGuard> {
    let default_level = if is_development() {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let console = fmt::layer().with_timer(LocalTime::rfc_3339());

    match get_or_create_log_dir() {
        Ok(log_dir) => {
            let appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file = fmt::layer()
                .with_timer(LocalTime::rfc_3339())
                .with_ansi(false)
                .with_writer(writer);

            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(file)
                .init();

            tracing::debug!(path = ?log_dir, "File logging enabled");
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .init();

            tracing::warn!(error = %e, "File logging disabled");
            None
        }
    }
}
