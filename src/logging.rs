//! File logging. Stdout belongs to the TUI, so records go to
//! `<cache_dir>/beerZoom.log`, filtered by `RUST_LOG` (default `info`).

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "beerZoom.log";

/// Install the global subscriber writing into `dir`. The returned guard
/// must be kept alive until exit so buffered records are flushed.
pub fn init(dir: &Path) -> Option<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
    if installed.is_err() {
        // A subscriber is already set; drop the guard so the writer shuts down.
        return None;
    }
    // Forward `log` records from dependencies (reqwest, hyper).
    if let Err(e) = tracing_log::LogTracer::init() {
        tracing::warn!("log records will not be forwarded: {}", e);
    }
    Some(guard)
}
