//! Logging setup for hosts without a tracing subscriber of their own

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "dscpl_companion=info";

/// Install a JSON `fmt` subscriber filtered by `RUST_LOG`.
///
/// Returns `false` when a global subscriber was already set.
#[must_use]
pub fn init_tracing() -> bool {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .try_init()
        .is_ok()
}
