//! Tracing setup for the server binary

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

use crate::config::Config;

/// Name of the log files in `log_directory`; a date suffix is added on rotation
const LOG_FILE_PREFIX: &str = "bookshelf.log";

/// Install the global tracing subscriber
///
/// Always logs to stdout. When the config has a `log_directory`, logs also go to a daily
/// rotated file there. The returned guard flushes that file on drop, so keep it alive until
/// shutdown.
pub fn init_tracing(config: &Config) -> Option<WorkerGuard> {
    let (file_layer, guard) = match config.log_directory {
        Some(ref dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_line_number(true)
                .with_writer(writer)
                .with_filter(config.log_level);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let my_crate_filter = EnvFilter::new("bookshelf");
    let subscriber = tracing_subscriber::registry()
        .with(my_crate_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
                .with_line_number(true)
                .with_filter(config.log_level),
        )
        .with(file_layer);
    tracing::subscriber::set_global_default(subscriber).expect("static tracing config");
    guard
}
