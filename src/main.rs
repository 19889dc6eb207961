//! flip-server
//!
//! A small HTTP resource server over two in-memory collections: recorded
//! coin flips and the aggregate tally per result label.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌────────────────────────────────────────────┐
//!                      │                FLIP SERVER                  │
//!                      │                                             │
//!     Client Request   │  ┌─────────┐    ┌──────────┐    ┌───────┐  │
//!     ─────────────────┼─▶│  http   │───▶│ handlers │───▶│ store │  │
//!                      │  │ server  │    │ (orchest.)│   │ flips │  │
//!     Client Response  │  └─────────┘    └──────────┘    │ counts│  │
//!     ◀────────────────┼───────────────────────────────  └───────┘  │
//!                      │                                             │
//!                      │  ┌───────────────────────────────────────┐ │
//!                      │  │         Cross-Cutting Concerns         │ │
//!                      │  │  ┌────────┐ ┌──────────────┐ ┌──────┐ │ │
//!                      │  │  │ config │ │observability │ │life- │ │ │
//!                      │  │  │ + seed │ │ logs/metrics │ │cycle │ │ │
//!                      │  │  └────────┘ └──────────────┘ └──────┘ │ │
//!                      │  └───────────────────────────────────────┘ │
//!                      └────────────────────────────────────────────┘
//! ```
//!
//! Both stores are seeded once at startup from the config's seed dataset
//! and discarded at shutdown; there is no persistence.

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use flip_server::config::{self, ServerConfig};
use flip_server::http::HttpServer;
use flip_server::lifecycle::Shutdown;
use flip_server::observability;
use flip_server::store::Stores;

#[derive(Parser)]
#[command(name = "flip-server")]
#[command(about = "In-memory coin flip resource server", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::logging::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => config::loader::load_config(path)?,
        None => ServerConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        seeded_labels = config.seed.counts.len(),
        seeded_flips = config.seed.flips.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => observability::metrics::init_metrics(addr),
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    let stores = Stores::from_seed(&config.seed);
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, stores);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
