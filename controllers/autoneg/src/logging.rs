//! Logger setup
//!
//! Interactive runs get a compact human-readable format. Everything else
//! (Cloud Run, CI) gets JSON records suitable for cloud log ingestion; the
//! service name is carried on the root span installed by `main`.

use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name used when K_SERVICE is not set
pub const DEFAULT_SERVICE_NAME: &str = "serverless-autoneg-controller";

/// Service name tag for structured logs
///
/// Cloud Run injects K_SERVICE into every container; outside of it the
/// constant default applies.
pub fn service_name() -> String {
    std::env::var("K_SERVICE")
        .ok()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string())
}

/// Install the global subscriber
///
/// RUST_LOG overrides the flag-provided level when present.
pub fn init(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    if std::io::stdout().is_terminal() {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_target(false),
            )
            .init();
    }
}
