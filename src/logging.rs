use std::io;
use tracing_appender::rolling;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber: `RUST_LOG` (or info) to stderr, and
/// per-match detail to a daily file under `logs/`.
pub fn configure_logging() {
    // Console log configuration (stderr)
    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,summary=info,statistics=info,keywords=info,hotspots=info,report=info")
    });
    let console_log = fmt::layer()
        .with_writer(io::stderr)
        .with_filter(console_filter);

    // File log configuration
    let file_appender = rolling::daily("logs", "flashpoint.log");
    let file_log = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_filter(EnvFilter::new(
            "info,summary=debug,statistics=debug,keywords=debug,hotspots=debug,report=debug",
        ));

    tracing_subscriber::Registry::default()
        .with(console_log)
        .with(file_log)
        .init();
}
