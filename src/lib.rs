pub mod config;
pub mod error;
pub mod export;
pub mod quiz;

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::RuntimeConfig;

/// Load env vars from `BIKE_QUIZ_ENV_FILE` if set, else `./.env`.
/// Missing files are ignored and already-set variables win.
pub fn load_env() {
    if let Ok(env_path) = std::env::var("BIKE_QUIZ_ENV_FILE") {
        let _ = dotenvy::from_path(env_path);
    } else {
        let _ = dotenvy::from_path(".env");
    }
}

/// Where log output may go for a given front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// stderr, unless `BIKE_QUIZ_LOG_FILE` redirects it
    Stderr,
    /// only `BIKE_QUIZ_LOG_FILE`; silent when unset (full-screen UIs own the terminal)
    FileOnly,
}

/// Install the global tracing subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(runtime: &RuntimeConfig, sink: LogSink) {
    if runtime.no_log {
        return;
    }

    let filter = EnvFilter::try_new(&runtime.log_level)
        .unwrap_or_else(|_| EnvFilter::new("bike_quiz=info"));

    match (&runtime.log_file, sink) {
        (Some(path), _) => match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init();
            }
            Err(e) => eprintln!("warning: cannot open log file {}: {}", path, e),
        },
        (None, LogSink::Stderr) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
        (None, LogSink::FileOnly) => {}
    }
}
