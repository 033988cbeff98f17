//! Structured logging for the travel search engine.
//!
//! This module provides structured logging using the `tracing` crate,
//! with support for different log levels, structured fields, and spans.

use crate::config::env::EnvConfig;
use tracing::{Level, Metadata};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system.
///
/// This should be called once at program startup. The log level can be
/// controlled via the `TREP_LOG_LEVEL` environment variable, falling back
/// to `RUST_LOG`.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let config = EnvConfig::from_env();

    let filter = match config.log_level.as_str() {
        "trace" => EnvFilter::new("trace"),
        "debug" => EnvFilter::new("debug"),
        "info" => EnvFilter::new("info"),
        "warn" => EnvFilter::new("warn"),
        "error" => EnvFilter::new("error"),
        _ => EnvFilter::new("info"),
    };

    let filter = filter.add_directive(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()).parse()?);

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(config.debug_mode)
        .with_thread_names(config.debug_mode)
        .with_file(config.debug_mode)
        .with_line_number(config.debug_mode);

    tracing_subscriber::registry().with(filter).with(fmt_layer).try_init()?;

    Ok(())
}

/// Initialize logging for tests.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt().with_env_filter("debug").with_test_writer().try_init();
}

// Re-export commonly used tracing macros
pub use tracing::{debug, error, info, trace, warn};
pub use tracing::{debug_span, error_span, info_span, trace_span, warn_span};
pub use tracing::{event, span};

/// Log index build progress with structured fields (spec §4.6).
#[macro_export]
macro_rules! log_index_build {
    ($level:expr, $stage:expr, $($field:tt)*) => {
        tracing::event!(
            $level,
            stage = %$stage,
            category = "index_build",
            $($field)*
        );
    };
}

/// Log slice/partition evaluation with structured fields (spec §4.4, §4.5).
#[macro_export]
macro_rules! log_slice_eval {
    ($level:expr, $slice:expr, $($field:tt)*) => {
        tracing::event!(
            $level,
            slice = %$slice,
            category = "slice_eval",
            $($field)*
        );
    };
}

/// Log matcher timing (spec §4.7).
#[macro_export]
macro_rules! log_match_perf {
    ($phrase:expr, $duration_ms:expr, $($field:tt)*) => {
        tracing::event!(
            tracing::Level::INFO,
            phrase = %$phrase,
            duration_ms = $duration_ms,
            category = "match_performance",
            $($field)*
        );
    };
}

/// Create a span for tracking operations.
#[macro_export]
macro_rules! trep_span {
    ($name:expr) => {
        tracing::info_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_macros_emit_without_panicking() {
        init_test_logging();

        info!("test info message");
        debug!("test debug message");
        warn!("test warning");
        error!("test error");

        info!(query = "nce", "interpreted query");

        log_index_build!(Level::INFO, "commit", document_count = 10);
        log_slice_eval!(Level::DEBUG, "san francisco", co_match = true);
        log_match_perf!("nce", 3, effective_edit_distance = 0);
    }

    #[test]
    fn spans_can_be_entered() {
        init_test_logging();

        let span = trep_span!("interpret_request", query_id = 123);
        let _guard = span.enter();

        info!("inside span");
        debug!(nested = true, "nested operation");
    }
}
