//! Observability subsystem: structured logging and request metrics.

pub mod logging;
pub mod metrics;
