//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global tracing subscriber
//! - Respect `RUST_LOG` when set, with a crate-scoped debug default
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - Log level configurable via environment

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber. Call once at process start.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flip_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
