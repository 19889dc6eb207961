//! Shared utilities for integration tests.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use flip_server::config::schema::{FlipSeed, ServerConfig};
use flip_server::http::HttpServer;
use flip_server::lifecycle::Shutdown;
use flip_server::store::Stores;

/// Spawn a server on an ephemeral port over the given seed dataset.
///
/// Returns the bound address and the shutdown handle. Keep the handle alive
/// for the duration of the test; dropping it (or calling `trigger`) stops
/// the server.
pub async fn start_server(counts: &[(&str, u64)], flips: &[(u64, &str)]) -> (SocketAddr, Shutdown) {
    let mut config = ServerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.seed.counts = counts
        .iter()
        .map(|(label, tally)| (label.to_string(), *tally))
        .collect();
    config.seed.flips = flips
        .iter()
        .map(|(id, result)| FlipSeed {
            id: *id,
            result: result.to_string(),
        })
        .collect();

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let stores = Stores::from_seed(&config.seed);
    let server = HttpServer::new(config, stores);
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// Build a URL against the spawned server.
pub fn url(addr: SocketAddr, path: &str) -> String {
    format!("http://{}{}", addr, path)
}
