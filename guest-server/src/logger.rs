//! Logging Infrastructure
//!
//! stdout by default; a daily rolling file when a log directory is configured.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is not set
fn default_directive(level: &str) -> String {
    format!("guest_server={level},guest_client={level},seat_layout={level},shared={level},tower_http=info")
}

/// Initialize the logger with optional file output
pub fn init_logger(log_level: &str, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(log_level)));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "guest-server");
            subscriber.with_ansi(false).with_writer(file_appender).init();
            return;
        }
        eprintln!("LOG_DIR {dir} does not exist, logging to stdout");
    }

    subscriber.init();
}
