//! Logging Infrastructure
//!
//! `RUST_LOG` wins over the configured level when set.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional daily rolling file output
pub fn init_logger_with_file(log_level: &str, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if std::fs::create_dir_all(log_path).is_ok() {
            let file_appender = tracing_appender::rolling::daily(log_path, "park-server");
            subscriber.with_ansi(false).with_writer(file_appender).init();
            return;
        }
        eprintln!("Log directory {dir} is not writable, logging to stdout");
    }

    subscriber.init();
}
