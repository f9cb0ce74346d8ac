//! Logging Infrastructure
//!
//! Terminal output by default; with a log directory, events go to a daily
//! rolling `barkeep.YYYY-MM-DD` file instead. `RUST_LOG` overrides the
//! configured level when set.

use tracing_subscriber::EnvFilter;

/// Initialize the logger at `info`, terminal only
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
///
/// A missing log directory is created; if that fails the logger falls back
/// to the terminal. Later calls are ignored.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or("info")));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let Some(dir) = log_dir else {
        let _ = builder.try_init();
        return;
    };

    match std::fs::create_dir_all(dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::daily(dir, "barkeep");
            let _ = builder.with_ansi(false).with_writer(appender).try_init();
        }
        Err(e) => {
            let _ = builder.try_init();
            tracing::warn!(dir = %dir, error = %e, "Cannot create log directory, logging to terminal");
        }
    }
}
