//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files, and
//! every section has a default so partial configs stay usable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration for the flip server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Seed dataset loaded into the in-memory stores at startup.
    pub seed: SeedConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Per-request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Whether to expose a Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Address for the metrics exporter.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

/// Seed dataset for the stores.
///
/// The count labels seeded here are the complete set of legal flip results:
/// the server only ever increments existing labels, never creates new ones.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Initial tallies, one entry per legal result label.
    pub counts: BTreeMap<String, u64>,

    /// Pre-existing flip records.
    pub flips: Vec<FlipSeed>,
}

/// One seeded flip record.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FlipSeed {
    /// Record identifier; must be positive and unique within the seed.
    pub id: u64,

    /// Result label; must name one of the seeded count labels.
    pub result: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        let counts = ["heads", "tails", "edge"]
            .into_iter()
            .map(|label| (label.to_string(), 0))
            .collect();
        Self {
            counts,
            flips: Vec::new(),
        }
    }
}
