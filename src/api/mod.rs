//! REST API server for relayboard.
//!
//! Provides HTTP endpoints for:
//! - Checklist creation on the configured task-board card
//! - Forwarding uploaded files to the transcription service

pub mod error;
pub mod routes;

use crate::config::Config;
use crate::forward::UploadForwarder;
use crate::trello::{ChecklistTarget, TrelloClient};
use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tracing::info;

/// Shared state for the API routes, built once from the config at startup.
#[derive(Clone)]
pub struct AppState {
    pub trello: TrelloClient,
    pub target: ChecklistTarget,
    pub forwarder: UploadForwarder,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self> {
        let credentials = config.trello.credentials()?;
        Ok(Self {
            trello: TrelloClient::new(credentials, config.trello.api_base.clone()),
            target: ChecklistTarget::from_config(&config.trello),
            forwarder: UploadForwarder::new(config.forwarding.upload_url.clone()),
        })
    }
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Root and version endpoints
        .route("/", get(status))
        .route("/version", get(version))
        // API routes
        .nest("/api", routes::router(state))
        .layer(ServiceBuilder::new())
}

pub struct ApiServer {
    port: u16,
    state: AppState,
}

impl ApiServer {
    pub fn new(port: u16, state: AppState) -> Self {
        Self { port, state }
    }

    pub async fn start(self) -> Result<()> {
        let app = router(self.state);

        let listener = tokio::net::TcpListener::bind(&format!("127.0.0.1:{}", self.port)).await?;

        info!("API server listening on http://127.0.0.1:{}", self.port);
        info!("Endpoints:");
        info!("  GET  /                      - Service info");
        info!("  GET  /version               - Get version info");
        info!("  POST /api/create-checklist  - Create checklist with item");
        info!("  POST /api/forward-upload    - Forward a file upload");

        axum::serve(listener, app).await?;

        Ok(())
    }
}

async fn status() -> Json<Value> {
    Json(json!({
        "service": "relayboard",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

async fn version() -> Json<Value> {
    Json(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "name": "relayboard"
    }))
}
