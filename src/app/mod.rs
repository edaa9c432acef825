use crate::api::{ApiServer, AppState};
use crate::config::Config;
use anyhow::Result;
use tracing::info;

/// Load config, assemble the shared state, and run the API server until it
/// exits.
pub async fn run_server(port_override: Option<u16>) -> Result<()> {
    info!("Starting relayboard service");

    let config = Config::load()?;
    let state = AppState::from_config(&config)?;
    let port = port_override.unwrap_or(config.server.port);

    let server = ApiServer::new(port, state);

    info!("relayboard is ready!");
    info!(
        "Test manually: curl -X POST http://127.0.0.1:{}/api/create-checklist",
        port
    );

    server.start().await
}
